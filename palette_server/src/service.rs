use futures::FutureExt;
use futures::future::BoxFuture;
use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::CONTENT_TYPE;
use hyper::http;
use hyper::http::{Method, Request, Response, StatusCode};
use hyper::service::Service;
use palette_core::{Color, PaletteKind, Rgb};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde_json::json;

const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const ALLOW_HEADERS: (&str, &str) = (
    "Access-Control-Allow-Headers",
    "authorization, x-client-info, apikey, content-type",
);

/// The two palette functions behind one HTTP service:
/// `POST /generate-palette` and `POST /extract-colors`.
#[derive(Clone)]
pub struct FunctionServer;

impl Service<Request<Incoming>> for FunctionServer {
    type Response = Response<Full<Bytes>>;
    type Error = http::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        async move {
            // CORS preflight, answered permissively for every path
            if req.method() == Method::OPTIONS {
                return Response::builder()
                    .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
                    .header(ALLOW_HEADERS.0, ALLOW_HEADERS.1)
                    .body("ok".into());
            }

            match (req.method(), req.uri().path()) {
                (&Method::POST, "/generate-palette") => {
                    match aggregate::<GenerateRequest>(req).await {
                        Ok(body) => {
                            let mut rng = SmallRng::from_entropy();
                            let (status, value) = generate_palette_reply(&body, &mut rng);
                            json_response(status, &value)
                        }
                        Err(response) => response,
                    }
                }
                (&Method::POST, "/extract-colors") => match aggregate::<ExtractRequest>(req).await
                {
                    Ok(body) => {
                        let (status, value) = extract_colors_reply(&body);
                        json_response(status, &value)
                    }
                    Err(response) => response,
                },
                _ => Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
                    .body("Not Found".into()),
            }
        }
        .boxed()
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub keyword: Option<String>,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Decide the generate-palette response. Missing keyword is a 400;
/// everything else is a 200 with exactly five colors.
pub fn generate_palette_reply(
    req: &GenerateRequest,
    rng: &mut impl rand::Rng,
) -> (StatusCode, serde_json::Value) {
    let Some(keyword) = req.keyword.as_deref().filter(|k| !k.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            json!({ "error": "Keyword is required" }),
        );
    };

    let kind = PaletteKind::parse(req.kind.as_deref().unwrap_or("theme"));
    let colors = palette_core::keyword_palette(keyword, kind, rng);
    (StatusCode::OK, json!({ "colors": colors }))
}

/// Decide the extract-colors response. The URL must be an absolute
/// http(s) URL; the payload is the fixed placeholder set until real
/// dominant-color extraction replaces it (the shape stays the same).
pub fn extract_colors_reply(req: &ExtractRequest) -> (StatusCode, serde_json::Value) {
    let Some(raw) = req.image_url.as_deref().filter(|u| !u.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            json!({ "error": "Image URL is required" }),
        );
    };

    match url::Url::parse(raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            (StatusCode::OK, json!({ "colors": extraction_fixture() }))
        }
        _ => (
            StatusCode::BAD_REQUEST,
            json!({ "error": "Failed to fetch image" }),
        ),
    }
}

fn extraction_fixture() -> Vec<Color> {
    [
        Rgb::new(38, 70, 83),
        Rgb::new(42, 157, 143),
        Rgb::new(233, 196, 106),
        Rgb::new(244, 162, 97),
        Rgb::new(231, 111, 81),
    ]
    .into_iter()
    .map(Color::from_rgb)
    .collect()
}

fn json_response(
    status: StatusCode,
    value: &serde_json::Value,
) -> http::Result<Response<Full<Bytes>>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .body(value.to_string().into())
}

/// Collect and deserialize a JSON request body. A body that cannot be
/// read is a 500, one that cannot be parsed is a 400.
async fn aggregate<T: serde::de::DeserializeOwned>(
    req: Request<Incoming>,
) -> Result<T, http::Result<Response<Full<Bytes>>>> {
    match req.into_body().collect().await {
        Err(e) => {
            eprintln!("failed to read request body: {e}");
            Err(json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "error": e.to_string() }),
            ))
        }
        Ok(body) => match serde_json::from_slice(&body.to_bytes()) {
            Err(e) => Err(json_response(
                StatusCode::BAD_REQUEST,
                &json!({ "error": e.to_string() }),
            )),
            Ok(value) => Ok(value),
        },
    }
}
