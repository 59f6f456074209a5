use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};

use serde::Deserialize;
use rs_lorem_core::{Generator, LoremError};

mod config;

use config::ServerConfig;

const DEFAULT_WORDS: i64 = 10;
const DEFAULT_PARAGRAPHS: i64 = 3;
const DEFAULT_ITEMS: i64 = 5;

/// Largest count a single request may ask for.
const MAX_COUNT: i64 = 10_000;

/// Query parameters for `/v1/words` and `/v1/shopping_list`
#[derive(Deserialize)]
struct CountParams {
	count: Option<i64>
}

/// Query parameters for `/v1/paragraphs`
#[derive(Deserialize)]
struct ParagraphsParams {
	count: Option<i64>,
	start_with_lorem_ipsum: Option<bool>
}

/// Maps a generation result to a plain-text response.
///
/// Invalid arguments are the caller's fault and map to `400`.
fn text_response(result: Result<String, LoremError>) -> HttpResponse {
	match result {
		Ok(text) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
		Err(e) => {
			warn!("rejected request: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// Rejects counts above [`MAX_COUNT`] with a `400`.
///
/// Negative counts are left to the generator, which names the parameter.
fn limit_count(count: i64) -> Result<i64, HttpResponse> {
	if count > MAX_COUNT {
		warn!("rejected request: count {count} above {MAX_COUNT}");
		return Err(HttpResponse::BadRequest().body(format!("count must be <= {MAX_COUNT}, got {count}")));
	}
	Ok(count)
}

/// HTTP GET endpoint `/v1/words`
///
/// Returns `count` space-separated words (default 10).
#[get("/v1/words")]
async fn get_words(generator: web::Data<Generator>, query: web::Query<CountParams>) -> impl Responder {
	match limit_count(query.count.unwrap_or(DEFAULT_WORDS)) {
		Ok(count) => text_response(generator.words(count)),
		Err(response) => response,
	}
}

/// HTTP GET endpoint `/v1/paragraphs`
///
/// Returns `count` paragraphs (default 3), starting with the opening
/// phrase unless `start_with_lorem_ipsum=false`.
#[get("/v1/paragraphs")]
async fn get_paragraphs(generator: web::Data<Generator>, query: web::Query<ParagraphsParams>) -> impl Responder {
	let start_with_lorem_ipsum = query.start_with_lorem_ipsum.unwrap_or(true);
	match limit_count(query.count.unwrap_or(DEFAULT_PARAGRAPHS)) {
		Ok(count) => text_response(generator.paragraphs(count, start_with_lorem_ipsum)),
		Err(response) => response,
	}
}

/// HTTP GET endpoint `/v1/shopping_list`
///
/// Returns a shopping list of `count` items (default 5).
#[get("/v1/shopping_list")]
async fn get_shopping_list(generator: web::Data<Generator>, query: web::Query<CountParams>) -> impl Responder {
	match limit_count(query.count.unwrap_or(DEFAULT_ITEMS)) {
		Ok(count) => text_response(generator.shopping_list(count)),
		Err(response) => response,
	}
}

/// HTTP GET endpoint `/v1/config`
///
/// Returns the sentence and paragraph ranges in use, as JSON.
#[get("/v1/config")]
async fn get_config(generator: web::Data<Generator>) -> impl Responder {
	HttpResponse::Ok().json(generator.config())
}

/// Registers every endpoint.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_words)
		.service(get_paragraphs)
		.service(get_shopping_list)
		.service(get_config);
}

/// Main entry point for the server.
///
/// The generator is immutable, so it is shared between workers
/// without a lock.
///
/// # Notes
/// - Binds to `RS_LOREM_HOST:RS_LOREM_PORT` (default 127.0.0.1:5000).
/// - Log verbosity follows `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
	let generator = web::Data::new(Generator::new());

	info!("listening on {}:{}", config.host, config.port);

	HttpServer::new(move || {
		let cors = Cors::default()
			.allow_any_origin()
			.allowed_methods(vec!["GET"])
			.max_age(3600);

		App::new()
			.app_data(generator.clone())
			.wrap(cors)
			.wrap(Logger::default())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
