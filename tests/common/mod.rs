#![allow(dead_code)]

use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::json;
use std::sync::{mpsc, Arc, Mutex};

type Seen = Arc<Mutex<Vec<SeenQuery>>>;

#[derive(Debug, Clone)]
pub struct SeenQuery {
    pub raw: String,
    pub codigo: String,
}

/// In-process stand-in for the inventory backend's search endpoint.
pub struct StubBackend {
    pub base_url: String,
    seen: Seen,
}

impl StubBackend {
    pub fn queries_for(&self, codigo: &str) -> Vec<SeenQuery> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|query| query.codigo == codigo)
            .cloned()
            .collect()
    }

    pub fn total_queries(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

pub static BACKEND: Lazy<StubBackend> = Lazy::new(spawn_backend);

// Runs on its own thread so it outlives the per-test tokio runtimes.
fn spawn_backend() -> StubBackend {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let (tx, rx) = mpsc::channel();
    let thread_seen = Arc::clone(&seen);

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("stub runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub backend");
            tx.send(listener.local_addr().expect("stub address"))
                .expect("report stub address");
            let app = Router::new()
                .route("/api/produtos_por_codigo", get(lookup))
                .with_state(thread_seen);
            axum::serve(listener, app).await.expect("stub backend");
        });
    });

    let addr = rx.recv().expect("stub backend address");
    StubBackend {
        base_url: format!("http://{addr}"),
        seen,
    }
}

#[derive(Debug, Deserialize)]
struct LookupParams {
    #[serde(default)]
    codigo: String,
}

async fn lookup(
    State(seen): State<Seen>,
    RawQuery(raw): RawQuery,
    Query(params): Query<LookupParams>,
) -> Response {
    seen.lock().unwrap().push(SeenQuery {
        raw: raw.unwrap_or_default(),
        codigo: params.codigo.clone(),
    });

    match params.codigo.as_str() {
        "7891000100103" => Json(json!([{
            "id": 42,
            "produto_nome": "Arroz",
            "validade_text": "10/12/2025",
            "validade_int": 1765364400,
            "quantidade": 5,
            "lote": "L1",
            "image_path": "arroz.jpg"
        }]))
        .into_response(),
        "7891000200200" => Json(json!([
            {
                "id": 7,
                "produto_nome": "Feijao",
                "validade_text": "01/02/2026",
                "quantidade": null,
                "lote": null,
                "image_path": "/uploads/feijao.png"
            },
            {
                "id": 8,
                "produto_nome": "Feijao",
                "validade_text": "01/03/2026",
                "quantidade": 12,
                "lote": "F2",
                "image_path": ""
            }
        ]))
        .into_response(),
        "500" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!([]))).into_response(),
        "lixo" => "definitely not json".into_response(),
        _ => Json(json!([])).into_response(),
    }
}

pub fn pick_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
