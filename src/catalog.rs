use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::models::{MovieDetail, MoviePage};

// Постер-заглушка, когда у фильма нет изображения
const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Клиент каталога фильмов (TMDB-совместимое API, только чтение)
#[derive(Clone)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
    image_base_url: String,
    api_key: String,
    language: String,
    region: String,
    poster_size: String,
    backdrop_size: String,
}

impl CatalogClient {
    /// Создает и конфигурирует клиент на основе настроек приложения.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30)) // Таймаут для HTTP-запросов.
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.base_url.clone(),
            image_base_url: config.image_base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            region: config.region.clone(),
            poster_size: config.poster_size.clone(),
            backdrop_size: config.backdrop_size.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        Ok(response.json::<T>().await?)
    }

    /// Популярные фильмы
    pub async fn popular(&self, page: u32) -> Result<MoviePage, CatalogError> {
        let page = page.to_string();
        self.get_json("movie/popular", &[("page", page.as_str())])
            .await
    }

    /// Сейчас в прокате (с учетом региона)
    pub async fn now_playing(&self, page: u32) -> Result<MoviePage, CatalogError> {
        let page = page.to_string();
        self.get_json(
            "movie/now_playing",
            &[("region", self.region.as_str()), ("page", page.as_str())],
        )
        .await
    }

    /// Скоро в прокате (с учетом региона)
    pub async fn upcoming(&self, page: u32) -> Result<MoviePage, CatalogError> {
        let page = page.to_string();
        self.get_json(
            "movie/upcoming",
            &[("region", self.region.as_str()), ("page", page.as_str())],
        )
        .await
    }

    /// Лучшие по рейтингу
    pub async fn top_rated(&self, page: u32) -> Result<MoviePage, CatalogError> {
        let page = page.to_string();
        self.get_json("movie/top_rated", &[("page", page.as_str())])
            .await
    }

    /// Поиск фильмов по названию
    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError> {
        let page = page.to_string();
        self.get_json("search/movie", &[("query", query), ("page", page.as_str())])
            .await
    }

    /// Детальная карточка фильма
    pub async fn movie_detail(&self, movie_id: i64) -> Result<MovieDetail, CatalogError> {
        let detail: MovieDetail = self.get_json(&format!("movie/{}", movie_id), &[]).await?;
        info!("Loaded movie detail for '{}'", detail.title);
        Ok(detail)
    }

    // === Ссылки на изображения ===

    pub fn poster_url(&self, path: Option<&str>) -> String {
        self.image_url(path, &self.poster_size)
    }

    pub fn backdrop_url(&self, path: Option<&str>) -> String {
        self.image_url(path, &self.backdrop_size)
    }

    fn image_url(&self, path: Option<&str>, size: &str) -> String {
        match path {
            Some(p) if !p.is_empty() => format!("{}{}{}", self.image_base_url, size, p),
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> CatalogConfig {
        CatalogConfig {
            base_url,
            image_base_url: "https://image.tmdb.org/t/p/".to_string(),
            api_key: "test-key".to_string(),
            language: "ko-KR".to_string(),
            region: "KR".to_string(),
            poster_size: "w500".to_string(),
            backdrop_size: "w1280".to_string(),
        }
    }

    fn sample_page() -> serde_json::Value {
        json!({
            "page": 1,
            "results": [{
                "id": 550,
                "title": "Fight Club",
                "poster_path": "/fc.jpg",
                "backdrop_path": null,
                "overview": "...",
                "release_date": "1999-10-15",
                "vote_average": 8.4
            }],
            "total_pages": 10,
            "total_results": 200
        })
    }

    #[tokio::test]
    async fn popular_sends_key_and_language_and_parses_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("language", "ko-KR"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_page()))
            .mount(&server)
            .await;

        let client = CatalogClient::from_config(&test_config(format!("{}/", server.uri())));
        let page = client.popular(1).await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Fight Club");
        assert_eq!(page.total_results, 200);
    }

    #[tokio::test]
    async fn now_playing_carries_region() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/now_playing"))
            .and(query_param("region", "KR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_page()))
            .mount(&server)
            .await;

        let client = CatalogClient::from_config(&test_config(format!("{}/", server.uri())));
        assert!(client.now_playing(1).await.is_ok());
    }

    #[tokio::test]
    async fn search_url_encodes_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .and(query_param("query", "spider man"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_page()))
            .mount(&server)
            .await;

        let client = CatalogClient::from_config(&test_config(format!("{}/", server.uri())));
        assert!(client.search("spider man", 1).await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_a_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = CatalogClient::from_config(&test_config(format!("{}/", server.uri())));
        let err = client.popular(1).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Status { status } if status.as_u16() == 401
        ));
    }

    #[tokio::test]
    async fn movie_detail_parses_runtime_and_genres() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/550"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 550,
                "title": "Fight Club",
                "poster_path": "/fc.jpg",
                "backdrop_path": "/bd.jpg",
                "overview": "...",
                "release_date": "1999-10-15",
                "vote_average": 8.4,
                "runtime": 139,
                "genres": [{"id": 18, "name": "Drama"}]
            })))
            .mount(&server)
            .await;

        let client = CatalogClient::from_config(&test_config(format!("{}/", server.uri())));
        let detail = client.movie_detail(550).await.unwrap();
        assert_eq!(detail.runtime, Some(139));
        assert_eq!(detail.genres[0].name, "Drama");
    }

    #[test]
    fn image_urls_fall_back_to_placeholder() {
        let client = CatalogClient::from_config(&test_config("https://api.example/".to_string()));
        assert_eq!(
            client.poster_url(Some("/fc.jpg")),
            "https://image.tmdb.org/t/p/w500/fc.jpg"
        );
        assert_eq!(client.poster_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(client.poster_url(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(
            client.backdrop_url(Some("/bd.jpg")),
            "https://image.tmdb.org/t/p/w1280/bd.jpg"
        );
    }
}
