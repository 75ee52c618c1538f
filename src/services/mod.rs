//! One thin wrapper per backend area. Every method issues a single request
//! and returns the decoded body unmodified.

pub mod auth;
pub mod main_menu;
pub mod movie_details;
pub mod search_results;
pub mod user_profile;

use crate::client::ApiClient;
use crate::storage::LocalStorage;

use self::auth::AuthService;
use self::main_menu::MainMenuService;
use self::movie_details::MovieDetailsService;
use self::search_results::SearchResultsService;
use self::user_profile::UserProfileService;

/// Every service, sharing one client and one storage.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub main_menu: MainMenuService,
    pub movie_details: MovieDetailsService,
    pub search_results: SearchResultsService,
    pub user_profile: UserProfileService,
}

impl Services {
    pub fn new(client: ApiClient, storage: LocalStorage) -> Self {
        Self {
            auth: AuthService::new(client.clone(), storage),
            main_menu: MainMenuService::new(client.clone()),
            movie_details: MovieDetailsService::new(client.clone()),
            search_results: SearchResultsService::new(client.clone()),
            user_profile: UserProfileService::new(client),
        }
    }
}
