use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::mailer::GmailMailerImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::participation::ParticipationRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::repository::webinar::WebinarRepositoryImpl;
use kernel::mailer::Mailer;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::participation::ParticipationRepository;
use kernel::repository::user::UserRepository;
use kernel::repository::webinar::WebinarRepository;
use kernel::usecase::book_seat::BookSeat;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    webinar_repository: Arc<dyn WebinarRepository>,
    participation_repository: Arc<dyn ParticipationRepository>,
    mailer: Arc<dyn Mailer>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let webinar_repository = Arc::new(WebinarRepositoryImpl::new(pool.clone()));
        let participation_repository = Arc::new(ParticipationRepositoryImpl::new(pool.clone()));
        let mailer = Arc::new(GmailMailerImpl::new(
            reqwest::Client::new(),
            app_config.mailer,
        ));
        Self {
            health_check_repository,
            user_repository,
            webinar_repository,
            participation_repository,
            mailer,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn webinar_repository(&self) -> Arc<dyn WebinarRepository> {
        self.webinar_repository.clone()
    }

    pub fn participation_repository(&self) -> Arc<dyn ParticipationRepository> {
        self.participation_repository.clone()
    }

    // 予約ユースケースをポートと結線した状態で払い出す
    pub fn book_seat(&self) -> BookSeat {
        BookSeat::new(
            self.participation_repository.clone(),
            self.user_repository.clone(),
            self.webinar_repository.clone(),
            self.mailer.clone(),
        )
    }
}
