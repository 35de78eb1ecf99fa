use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Duration, Utc};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::info;

use staffline::config::AppConfig;
use staffline::error::AppError;
use staffline::telemetry;
use staffline::workflows::staffing::memory::{
    InMemoryDirectory, InMemoryPublisher, InMemoryRepository, StaticSignalSource,
};
use staffline::workflows::staffing::{
    staffing_router, CandidateResponse, CandidateSignals, Employee, EmployeeId, NewRequest,
    RoleTier, ScoringConfig, StaffingService, UrgencyTier, ValidationDecision,
};

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Staffline",
    about = "Run the temporary-staffing workflow service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Walk a full request lifecycle against the in-memory stack
    Demo,
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Demo => run_demo(),
    }
}

type DemoService =
    StaffingService<InMemoryRepository, InMemoryDirectory, StaticSignalSource, InMemoryPublisher>;

fn demo_roster() -> Vec<Employee> {
    let employee = |id: &str, name: &str, tier, dept: &str, manager: Option<&str>| Employee {
        id: EmployeeId(id.to_string()),
        display_name: name.to_string(),
        role_tier: tier,
        department: dept.to_string(),
        site: "Lyon".to_string(),
        manager: manager.map(|id| EmployeeId(id.to_string())),
        active: true,
        available: true,
    };

    vec![
        employee(
            "emp-requester",
            "Nadia Benali",
            RoleTier::Worker,
            "logistics",
            Some("emp-manager"),
        ),
        employee(
            "emp-manager",
            "Pierre Garnier",
            RoleTier::Manager,
            "logistics",
            Some("emp-director"),
        ),
        employee(
            "emp-director",
            "Sophie Marchand",
            RoleTier::Director,
            "operations",
            None,
        ),
        employee("emp-hr", "Karim Haddad", RoleTier::HumanResources, "hr", None),
        employee(
            "emp-cand-1",
            "Lucas Fontaine",
            RoleTier::Worker,
            "logistics",
            Some("emp-manager"),
        ),
        employee(
            "emp-cand-2",
            "Amelie Rousseau",
            RoleTier::Worker,
            "logistics",
            Some("emp-manager"),
        ),
    ]
}

fn demo_signals() -> HashMap<EmployeeId, CandidateSignals> {
    let mut signals = HashMap::new();
    signals.insert(
        EmployeeId("emp-cand-1".to_string()),
        CandidateSignals {
            competence: 85,
            experience: 70,
            availability: 90,
            proximity: 80,
            available_for_period: true,
            similar_experience: true,
            recommended: false,
        },
    );
    signals.insert(
        EmployeeId("emp-cand-2".to_string()),
        CandidateSignals {
            competence: 65,
            experience: 55,
            availability: 75,
            proximity: 60,
            available_for_period: true,
            similar_experience: false,
            recommended: true,
        },
    );
    signals
}

fn demo_service(config: &AppConfig) -> (Arc<DemoService>, Arc<InMemoryPublisher>) {
    let repository = Arc::new(InMemoryRepository::new());
    let directory = Arc::new(InMemoryDirectory::new(demo_roster()));
    let signals = Arc::new(StaticSignalSource::new(demo_signals()));
    let publisher = Arc::new(InMemoryPublisher::new());
    let service = Arc::new(
        StaffingService::new(
            repository,
            directory,
            signals,
            publisher.clone(),
            ScoringConfig::default(),
        )
        .with_limits(
            config.workflow.response_window_days,
            config.workflow.max_proposals_per_proposer,
        ),
    );
    (service, publisher)
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let (service, _publisher) = demo_service(&config);

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(staffing_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "staffing workflow service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry).ok();

    let (service, publisher) = demo_service(&config);

    let requester = EmployeeId("emp-requester".to_string());
    let manager = EmployeeId("emp-manager".to_string());
    let director = EmployeeId("emp-director".to_string());
    let hr = EmployeeId("emp-hr".to_string());

    let start = Utc::now().date_naive() + Duration::days(7);
    let request = service.create_request(
        &requester,
        NewRequest {
            position: "Forklift operator".to_string(),
            department: "logistics".to_string(),
            site: "Lyon".to_string(),
            start_date: start,
            end_date: start + Duration::days(30),
            urgency: UrgencyTier::High,
        },
    )?;
    println!(
        "created request {} ({})",
        request.number,
        request.status.label()
    );

    let first = service.propose(
        &request.id,
        &manager,
        &EmployeeId("emp-cand-1".to_string()),
        "Knows the site and the equipment".to_string(),
    )?;
    let second = service.propose(
        &request.id,
        &manager,
        &EmployeeId("emp-cand-2".to_string()),
        "Recommended by the night shift lead".to_string(),
    )?;
    println!(
        "proposals: {} (score {}), {} (score {})",
        first.id.0,
        first.final_score(),
        second.id.0,
        second.final_score()
    );

    for (validator, label) in [(&manager, "manager"), (&director, "director"), (&hr, "hr")] {
        let record = service.record_validation(
            &request.id,
            validator,
            vec![first.id.clone(), second.id.clone()],
            ValidationDecision::Approve,
            format!("approved by {label}"),
            None,
        )?;
        let current = service.get_request(&request.id)?;
        println!(
            "level {} approved -> status {} (level {})",
            record.level,
            current.status.label(),
            current.current_validation_level
        );
    }

    let refused = service.record_response(
        &request.id,
        CandidateResponse::Refused,
        Some("accepted another assignment".to_string()),
    )?;
    println!(
        "first pick refused -> fell back to {:?} ({})",
        refused.selected_candidate,
        refused.status.label()
    );

    let accepted = service.record_response(&request.id, CandidateResponse::Accepted, None)?;
    println!(
        "second pick accepted -> status {} effective {}",
        accepted.status.label(),
        accepted
            .effective_start
            .map(|date| date.to_string())
            .unwrap_or_default()
    );

    println!("notifications emitted: {}", publisher.events().len());
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}
