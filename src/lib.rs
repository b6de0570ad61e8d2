pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod screens;
pub mod services;
pub mod storage;
pub mod utils;
pub mod widgets;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::models::admin_user::AdminUser;
use crate::models::application::Application;
use crate::models::event::Event;
use crate::models::offer::Offer;
use crate::models::portfolio::PortfolioItem;
use crate::screens::list::ListController;
use crate::screens::offer_form::OfferForm;
use crate::services::http_client::ApiClient;
use crate::services::resource_service::{
    AdminService, ApplicationService, EventService, OfferService, PortfolioService,
};
use crate::storage::token_store::TokenStore;
use crate::widgets::pointer::PointerEvents;

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub page_size: u32,
    pub pointer_events: PointerEvents,
    pub offer_service: OfferService,
    pub application_service: ApplicationService,
    pub admin_service: AdminService,
    pub event_service: EventService,
    pub portfolio_service: PortfolioService,
}

impl AppState {
    pub fn new(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let client = ApiClient::new(config, tokens)?;

        Ok(Self {
            offer_service: OfferService::new(client.clone()),
            application_service: ApplicationService::new(client.clone()),
            admin_service: AdminService::new(client.clone()),
            event_service: EventService::new(client.clone()),
            portfolio_service: PortfolioService::new(client.clone()),
            page_size: config.page_size,
            pointer_events: PointerEvents::new(),
            client,
        })
    }

    pub fn offer_list(&self) -> ListController<Offer> {
        ListController::new(self.offer_service.clone(), self.page_size)
    }

    pub fn application_list(&self) -> ListController<Application> {
        ListController::new(self.application_service.clone(), self.page_size)
    }

    pub fn admin_list(&self) -> ListController<AdminUser> {
        ListController::new(self.admin_service.clone(), self.page_size)
    }

    pub fn event_list(&self) -> ListController<Event> {
        ListController::new(self.event_service.clone(), self.page_size)
    }

    pub fn portfolio_list(&self) -> ListController<PortfolioItem> {
        ListController::new(self.portfolio_service.clone(), self.page_size)
    }

    pub fn offer_form(&self) -> OfferForm {
        OfferForm::new(self.offer_service.clone(), &self.pointer_events)
    }
}
