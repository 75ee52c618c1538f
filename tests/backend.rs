use std::collections::HashMap;
use std::env;
use std::fs;
use std::sync::Mutex;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use estgflix::client::config::ClientConfig;
use estgflix::client::factory::ClientFactory;
use estgflix::router::Route;
use estgflix::storage::CURRENT_USER_KEY;
use estgflix::views::login::LoginView;
use estgflix::views::main_menu::MainMenuView;
use estgflix::views::search_results::SearchResultsView;
use estgflix::views::{Effect, View};
use serde_json::{json, Value};

const TOKEN: &str = "tok-alice";

#[derive(Default)]
struct Backend {
    auth_headers: Mutex<Vec<String>>,
}

fn record(state: &Backend, req: &HttpRequest) -> String {
    let auth = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.auth_headers.lock().unwrap().push(auth.clone());
    auth
}

fn movie(id: i64, title: &str) -> Value {
    json!({"movieId": id, "imdbId": id, "tmdbId": id, "title": title, "year": 1995})
}

async fn login(state: web::Data<Backend>, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    record(&state, &req);
    let user = &body["user"];
    if user["username"] == "alice" && user["password"] == "pw" {
        HttpResponse::Ok().json(json!({"token": TOKEN}))
    } else {
        HttpResponse::Unauthorized().body("Could not verify")
    }
}

async fn me(state: web::Data<Backend>, req: HttpRequest) -> HttpResponse {
    if record(&state, &req) == format!("Bearer {TOKEN}") {
        HttpResponse::Ok().json(json!({"user_id": 1, "username": "alice"}))
    } else {
        HttpResponse::Unauthorized().json(json!({"mensagem": "Invalid token"}))
    }
}

async fn main_menu(
    state: web::Data<Backend>,
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    record(&state, &req);
    let user_id = query.get("userID").cloned().unwrap_or_default();
    HttpResponse::Ok().json(json!({
        "popularActionMovies": [movie(1, "Heat")],
        "popularComedyMovies": [movie(2, "Big"), movie(3, "Airplane!")],
        "recommendedUserMovies": [movie(4, &format!("Picked for user {user_id}"))],
    }))
}

async fn search(
    state: web::Data<Backend>,
    req: HttpRequest,
    words: web::Path<String>,
) -> HttpResponse {
    record(&state, &req);
    HttpResponse::Ok().json(json!({"moviesSearched": [movie(9, &words.into_inner())]}))
}

fn start_backend(state: web::Data<Backend>) -> String {
    let server = HttpServer::new(move || {
        App::new().app_data(state.clone()).service(
            web::scope("/api")
                .route("/login", web::post().to(login))
                .route("/me", web::get().to(me))
                .route("/mainMenu", web::get().to(main_menu))
                .route("/searchResults/{words}", web::get().to(search)),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/api")
}

fn factory(server: String) -> ClientFactory {
    let path = env::temp_dir()
        .join("_estgflix_test_backend")
        .join("local_storage.json");
    let _ = fs::remove_file(&path);
    ClientFactory::new(ClientConfig {
        server,
        storage_path: format!("{}", path.display()),
    })
}

#[actix_web::test]
async fn test_login_then_browse() {
    let state = web::Data::new(Backend::default());
    let server = start_backend(state.clone());
    let factory = factory(server);
    let services = factory.build_services().unwrap();
    let storage = factory.build_storage();

    // Without a session the placeholder token is sent and rejected
    let err = services.auth.get_token().await.unwrap_err();
    assert!(err.is_unauthorized());

    let login = LoginView::new(services.auth.clone());
    let effects = login.on_login("alice", "wrong").await.unwrap();
    assert!(matches!(effects[0], Effect::Alert(_)));
    assert_eq!(storage.get_item(CURRENT_USER_KEY).unwrap(), None);

    let effects = login.on_login("alice", "pw").await.unwrap();
    assert_eq!(effects, vec![Effect::Navigate(Route::MainMenu)]);
    assert_eq!(
        storage.get_item(CURRENT_USER_KEY).unwrap().as_deref(),
        Some(TOKEN)
    );

    let mut menu = MainMenuView::new(services.auth.clone(), services.main_menu.clone());
    menu.load().await.unwrap();
    assert_eq!(menu.popular_comedy_movies.len(), 2);
    assert_eq!(
        menu.user_recommended_movies[0].title.as_deref(),
        Some("Picked for user 1")
    );

    let mut results = SearchResultsView::new(
        String::from("toy story/2"),
        services.auth.clone(),
        services.search_results.clone(),
    );
    results.load().await.unwrap();
    assert_eq!(results.movies_searched[0].title.as_deref(), Some("toy story/2"));
    assert_eq!(results.movies_searched[0].year.as_deref(), Some("1995"));

    let headers = state.auth_headers.lock().unwrap().clone();
    assert_eq!(
        headers,
        vec![
            "Bearer {}",
            "Bearer {}",
            "Bearer {}",
            "Bearer tok-alice",
            "Bearer tok-alice",
            "Bearer tok-alice",
            "Bearer tok-alice",
        ]
    );
}
