use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::package::PackageRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::package::PackageRepository;
use kernel::repository::room::RoomRepository;
use kernel::service::availability::AvailabilityService;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    room_repository: Arc<dyn RoomRepository>,
    package_repository: Arc<dyn PackageRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    availability_service: AvailabilityService,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let room_repository: Arc<dyn RoomRepository> =
            Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let package_repository: Arc<dyn PackageRepository> =
            Arc::new(PackageRepositoryImpl::new(pool.clone()));
        let booking_repository: Arc<dyn BookingRepository> =
            Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let availability_service = AvailabilityService::new(
            room_repository.clone(),
            package_repository.clone(),
            booking_repository.clone(),
        );
        Self {
            health_check_repository,
            room_repository,
            package_repository,
            booking_repository,
            availability_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn package_repository(&self) -> Arc<dyn PackageRepository> {
        self.package_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn availability_service(&self) -> &AvailabilityService {
        &self.availability_service
    }
}
