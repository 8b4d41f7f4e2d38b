use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Record {
    date: String,
    weight: f64,
    water: f64,
    sleep: f64,
}

#[derive(Debug, Deserialize)]
struct WaterGoal {
    goal_liters: f64,
    achieved_pct: f64,
    remaining_pct: f64,
}

#[derive(Debug, Deserialize)]
struct WeightPoint {
    date: String,
    weight: f64,
}

#[derive(Debug, Deserialize)]
struct Dashboard {
    bmi: f64,
    bmi_band: String,
    avg_sleep_7: f64,
    total_water_7: f64,
    water_goal: WaterGoal,
    weight_series: Vec<WeightPoint>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "health_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/history")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_health_tracker"))
        .env("PORT", port.to_string())
        .env("HEALTH_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn save_entry(
    client: &Client,
    base_url: &str,
    date: &str,
    weight: &str,
    water: &str,
    sleep: &str,
) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/entry"))
        .json(&serde_json::json!({
            "date": date,
            "weight": weight,
            "water": water,
            "sleep": sleep,
        }))
        .send()
        .await
        .unwrap()
}

async fn fetch_history(client: &Client, base_url: &str) -> Vec<Record> {
    client
        .get(format!("{base_url}/api/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn fetch_dashboard(client: &Client, base_url: &str) -> Option<Dashboard> {
    client
        .get(format!("{base_url}/api/dashboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_saved_entry_shows_up_in_history() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = save_entry(&client, &server.base_url, "2026-05-01", "70.5", "2.5", "7").await;
    assert!(response.status().is_success());

    let saved: Record = response.json().await.unwrap();
    assert_eq!(saved.date, "2026-05-01");
    assert_eq!(saved.weight, 70.5);
    assert_eq!(saved.water, 2.5);
    assert_eq!(saved.sleep, 7.0);

    let history = fetch_history(&client, &server.base_url).await;
    let entry = history
        .iter()
        .find(|r| r.date == "2026-05-01")
        .expect("entry missing from history");
    assert_eq!(entry.weight, 70.5);
}

#[tokio::test]
async fn http_same_date_replaces_instead_of_duplicating() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let first = save_entry(&client, &server.base_url, "2026-05-02", "80", "2", "6").await;
    assert!(first.status().is_success());
    let second = save_entry(&client, &server.base_url, "2026-05-02", "81", "2.2", "6.5").await;
    assert!(second.status().is_success());

    let history = fetch_history(&client, &server.base_url).await;
    let matching: Vec<&Record> = history.iter().filter(|r| r.date == "2026-05-02").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].weight, 81.0);
    assert_eq!(matching[0].water, 2.2);
}

#[tokio::test]
async fn http_non_numeric_weight_is_rejected_without_mutation() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = save_entry(&client, &server.base_url, "2026-05-03", "abc", "2", "7").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let message = response.text().await.unwrap();
    assert!(message.contains("weight"));

    let history = fetch_history(&client, &server.base_url).await;
    assert!(history.iter().all(|r| r.date != "2026-05-03"));
}

#[tokio::test]
async fn http_empty_date_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = save_entry(&client, &server.base_url, "  ", "70", "2", "7").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_dashboard_lifecycle_on_fresh_store() {
    let _guard = TEST_LOCK.lock().await;
    // Dedicated server: this test depends on starting from an empty store.
    let server = spawn_server().await;
    let client = Client::new();

    assert!(fetch_dashboard(&client, &server.base_url).await.is_none());
    let history = fetch_history(&client, &server.base_url).await;
    assert!(history.is_empty());

    // Insert out of calendar order; weight 55 at the assumed 1.70 m height
    // lands in the normal band.
    for day in [3, 1, 7, 5, 2, 6, 4] {
        let date = format!("2026-04-{day:02}");
        let response = save_entry(&client, &server.base_url, &date, "55", "3", "8").await;
        assert!(response.status().is_success());
    }

    let dashboard = fetch_dashboard(&client, &server.base_url)
        .await
        .expect("dashboard should exist once entries are saved");
    assert!((dashboard.bmi - 19.03).abs() < 0.01);
    assert_eq!(dashboard.bmi_band, "normal");
    assert_eq!(dashboard.avg_sleep_7, 8.0);
    assert_eq!(dashboard.total_water_7, 21.0);
    assert_eq!(dashboard.water_goal.goal_liters, 21.0);
    assert_eq!(dashboard.water_goal.achieved_pct, 100.0);
    assert_eq!(dashboard.water_goal.remaining_pct, 0.0);

    // Weight series comes back ascending by date regardless of insert order.
    let dates: Vec<&str> = dashboard
        .weight_series
        .iter()
        .map(|p| p.date.as_str())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(dashboard.weight_series.len(), 7);
    assert!(dashboard.weight_series.iter().all(|p| p.weight == 55.0));

    // History is newest first.
    let history = fetch_history(&client, &server.base_url).await;
    assert_eq!(history.len(), 7);
    assert_eq!(history[0].date, "2026-04-07");
    assert_eq!(history[6].date, "2026-04-01");
}

#[tokio::test]
async fn http_form_endpoint_redirects_home() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/entry/add", server.base_url))
        .form(&[
            ("date", "2026-05-04"),
            ("weight", "72"),
            ("water", "1.5"),
            ("sleep", "6"),
        ])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let history = fetch_history(&client, &server.base_url).await;
    assert!(history.iter().any(|r| r.date == "2026-05-04"));
}
