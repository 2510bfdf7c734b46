mod support;

use std::sync::Arc;
use std::time::Duration;

use medclass::api::{EdaData, GeneralStats, HealthStatus, Prediction, RemoteError};
use medclass::config::AppConfig;
use medclass::egui_app::controller::DashboardController;
use medclass::egui_app::state::{ApiHealth, FetchStatus, Page, SlotView};
use medclass::egui_app::view_model;
use medclass::samples;
use support::fake_api::FakeApi;
use support::wait_for_jobs;

const WAIT: Duration = Duration::from_secs(5);

fn controller_with(api: Arc<FakeApi>) -> DashboardController {
    let config = AppConfig {
        check_health_on_startup: false,
        ..AppConfig::default()
    };
    DashboardController::new(api, &config)
}

fn live_eda() -> EdaData {
    EdaData {
        general_stats: GeneralStats {
            total_articles: 3565,
            avg_abstract_length: 1532.4,
            total_unique_labels: 4,
        },
        label_distribution: [("neurological", 1785u64), ("oncological", 601)]
            .into_iter()
            .collect(),
        length_distribution: [("0-500", 98u64)].into_iter().collect(),
        ..EdaData::default()
    }
}

#[test]
fn artifacts_failure_falls_back_independently_of_eda() {
    let api = Arc::new(FakeApi::default());
    api.push_eda(Ok(live_eda()));
    api.push_artifacts(Err(RemoteError::Status {
        status: 500,
        body: r#"{"detail": "artifacts missing"}"#.to_string(),
    }));
    let mut controller = controller_with(api);

    controller.start_initial_fetch();
    assert!(controller.data_loading());
    assert_eq!(controller.ui.eda.view(), SlotView::Loading);
    assert!(wait_for_jobs(&mut controller, WAIT));

    match controller.ui.eda.view() {
        SlotView::Ready {
            data,
            fallback_warning,
        } => {
            assert_eq!(data.general_stats.total_articles, 3565);
            assert_eq!(fallback_warning, None);
        }
        other => panic!("unexpected EDA view: {other:?}"),
    }
    match controller.ui.artifacts.view() {
        SlotView::Ready {
            data,
            fallback_warning,
        } => {
            assert_eq!(*data, samples::sample_artifacts());
            assert_eq!(
                fallback_warning,
                Some("API returned HTTP 500: artifacts missing")
            );
        }
        other => panic!("unexpected artifacts view: {other:?}"),
    }
    assert_eq!(controller.ui.status.badge_label, "Warning");
}

#[test]
fn unreachable_api_shows_sample_eda() {
    let api = Arc::new(FakeApi::default());
    let mut controller = controller_with(api);

    controller.start_initial_fetch();
    assert!(wait_for_jobs(&mut controller, WAIT));

    let eda = controller.ui.eda.data().expect("fallback data");
    assert!(controller.ui.eda.is_fallback());
    assert_eq!(eda.general_stats.total_articles, 1250);
    assert_eq!(eda.label_distribution.total(), 1250);
    assert_eq!(eda.length_distribution.total(), 1250);
    assert!(matches!(
        controller.ui.eda.status(),
        FetchStatus::Errored(message) if message.contains("no canned reply")
    ));
}

#[test]
fn reload_replaces_fallback_with_live_data() {
    let api = Arc::new(FakeApi::default());
    let mut controller = controller_with(Arc::clone(&api));
    controller.start_initial_fetch();
    assert!(wait_for_jobs(&mut controller, WAIT));
    assert!(controller.ui.eda.is_fallback());

    api.push_eda(Ok(live_eda()));
    api.push_artifacts(Ok(samples::sample_artifacts()));
    controller.refresh_remote_data();
    assert!(wait_for_jobs(&mut controller, WAIT));

    assert_eq!(controller.ui.eda.status(), &FetchStatus::Loaded);
    assert_eq!(controller.ui.artifacts.status(), &FetchStatus::Loaded);
    assert_eq!(
        controller.ui.eda.data().unwrap().general_stats.total_articles,
        3565
    );
    assert_eq!(controller.ui.status.badge_label, "Info");
}

#[test]
fn unknown_class_selection_resolves_to_first_class() {
    let api = Arc::new(FakeApi::default());
    api.push_artifacts(Ok(samples::sample_artifacts()));
    let mut controller = controller_with(api);
    controller.start_initial_fetch();
    assert!(wait_for_jobs(&mut controller, WAIT));

    controller.select_metrics_class("Dermatological");
    let artifacts = controller.ui.artifacts.data().unwrap();
    let detail = view_model::class_detail(
        artifacts,
        controller.ui.metrics.selected_class.as_deref(),
    )
    .expect("sample artifacts have classes");
    assert_eq!(detail.class_name, artifacts.class_names[0]);

    let third = artifacts.class_names[2].clone();
    controller.select_metrics_class(&third);
    let artifacts = controller.ui.artifacts.data().unwrap();
    let detail = view_model::class_detail(
        artifacts,
        controller.ui.metrics.selected_class.as_deref(),
    )
    .unwrap();
    assert_eq!(detail.class_name, third);
}

#[test]
fn blank_fields_do_not_start_a_prediction() {
    let api = Arc::new(FakeApi::default());
    let mut controller = controller_with(Arc::clone(&api));

    controller.ui.demo.title = "Stroke outcomes".into();
    controller.ui.demo.abstract_text = "   \n\t".into();
    controller.submit_prediction();
    assert!(!controller.prediction_in_flight());

    controller.ui.demo.title.clear();
    controller.ui.demo.abstract_text = "Cerebral infarction.".into();
    controller.submit_prediction();
    assert!(!controller.prediction_in_flight());
    assert!(api.payloads.lock().unwrap().is_empty());
}

#[test]
fn prediction_results_are_ranked_with_keywords() {
    let api = Arc::new(FakeApi::default());
    api.push_prediction(Ok(Prediction {
        labels: vec!["Oncological".into(), "Neurological".into()],
        confidences: vec![0.32, 0.91],
        is_low_confidence: false,
    }));
    let mut controller = controller_with(Arc::clone(&api));
    controller.ui.demo.title = "Stroke and brain injury".into();
    controller.ui.demo.abstract_text = "Neurons, cognitive decline.".into();

    controller.submit_prediction();
    assert!(controller.ui.demo.submitting);
    controller.submit_prediction();
    assert!(wait_for_jobs(&mut controller, WAIT));

    assert_eq!(api.payloads.lock().unwrap().len(), 1);
    assert!(!controller.ui.demo.submitting);
    assert_eq!(controller.ui.demo.last_error, None);
    let prediction = controller.ui.demo.prediction.as_ref().unwrap();
    let ranked = view_model::rank_predictions(prediction, &controller.ui.demo.submitted_text);
    let labels: Vec<&str> = ranked.cards.iter().map(|card| card.label.as_str()).collect();
    assert_eq!(labels, vec!["Neurological", "Oncological"]);
    assert_eq!(ranked.cards[0].percent_text, "91.0%");
    assert!(ranked.cards[0].keywords.contains(&"brain".to_string()));
    assert_eq!(ranked.mismatch, None);
}

#[test]
fn prediction_failure_names_the_api_url() {
    let api = Arc::new(FakeApi::default());
    api.push_prediction(Err(RemoteError::Transport("connection refused".into())));
    let mut controller = controller_with(api);
    controller.ui.demo.title = "Title".into();
    controller.ui.demo.abstract_text = "Abstract".into();

    controller.submit_prediction();
    assert!(wait_for_jobs(&mut controller, WAIT));

    let error = controller.ui.demo.last_error.as_deref().unwrap();
    assert!(error.starts_with("Network error: connection refused"));
    assert!(error.ends_with("Check that the API is running at: http://fake.test"));
    assert!(controller.ui.demo.prediction.is_none());
    assert!(!controller.ui.demo.submitting);
    assert!(controller.ui.demo.can_submit());
}

#[test]
fn health_check_updates_status_bar() {
    let api = Arc::new(FakeApi::default());
    api.push_health(Ok(HealthStatus {
        status: "ok".into(),
        message: "Medical classifier API".into(),
    }));
    let mut controller = controller_with(Arc::clone(&api));

    controller.check_api_health();
    assert_eq!(controller.ui.status.api_health, ApiHealth::Checking);
    assert!(wait_for_jobs(&mut controller, WAIT));
    assert_eq!(
        controller.ui.status.api_health,
        ApiHealth::Online("Medical classifier API".into())
    );

    controller.check_api_health();
    assert!(wait_for_jobs(&mut controller, WAIT));
    assert!(matches!(
        controller.ui.status.api_health,
        ApiHealth::Unreachable(_)
    ));
}

#[test]
fn startup_uses_configured_page_and_docs_url() {
    let api = Arc::new(FakeApi::default());
    let config = AppConfig {
        default_page: Page::Demo,
        check_health_on_startup: false,
        ..AppConfig::default()
    };
    let mut controller = DashboardController::new(api, &config);
    assert_eq!(controller.ui.page, Page::Demo);
    assert_eq!(controller.ui.api_docs_url, "http://fake.test/docs");

    controller.select_page(Page::HowItWorks);
    assert_eq!(controller.ui.page, Page::HowItWorks);
}
