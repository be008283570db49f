use verba_api::Client;
use verba_lib::crawl::crawl;
use verba_lib::{CrawlMode, Domain, PortalConfig, QueryFilter, YearScope};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM_PATH: &str = "/transparencia/verbaIndenizatoria";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

/// Domain with years 2020 and 2019, where 2019 offers months 1-2 and
/// politicians A and B. Built directly so tests exercise the engine
/// without a discovery round-trip.
fn test_domain() -> Domain {
    let mut domain = Domain {
        years: vec!["2020".to_string(), "2019".to_string()],
        ..Domain::default()
    };
    domain.scopes.insert(
        "2020".to_string(),
        YearScope {
            months: vec!["1".to_string()],
            politicians: vec!["A".to_string()],
        },
    );
    domain.scopes.insert(
        "2019".to_string(),
        YearScope {
            months: vec!["1".to_string(), "2".to_string()],
            politicians: vec!["A".to_string(), "B".to_string()],
        },
    );
    domain
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

#[tokio::test]
async fn per_politician_issues_one_request_per_politician() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("reports_flat.html")))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let filter = QueryFilter::new().with_year(2019).with_month(1);
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &filter,
        CrawlMode::PerPolitician,
    )
    .await;

    assert_eq!(request_count(&server).await, 2);

    let reports = tree.reports("2019", "1").unwrap();
    assert_eq!(reports.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(tree.entries("2019", "1", "A").unwrap().len(), 1);
    assert_eq!(
        tree.entries("2019", "1", "A").unwrap()[0].link,
        "/docs/single-jan.pdf"
    );
}

#[tokio::test]
async fn aggregate_issues_one_request_per_month() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reports_grouped.html")),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let filter = QueryFilter::new().with_year(2019).with_months([1, 2]);
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &filter,
        CrawlMode::Aggregate,
    )
    .await;

    assert_eq!(request_count(&server).await, 2);

    let months: Vec<_> = tree
        .reports("2019", "1")
        .into_iter()
        .chain(tree.reports("2019", "2"))
        .collect();
    assert_eq!(months.len(), 2);
    assert!(tree.reports("2019", "1").unwrap().contains_key("Deputado A"));
    assert!(tree.reports("2019", "1").unwrap().contains_key("Deputada B"));
}

#[tokio::test]
async fn aggregate_sends_empty_politician_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reports_grouped.html")),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let filter = QueryFilter::new().with_year(2019).with_month(1);
    crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &filter,
        CrawlMode::Aggregate,
    )
    .await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body).into_owned();
    assert!(body.contains("transparencia.ano=2019"));
    assert!(body.contains("transparencia.mes=1"));
    assert!(body.contains("transparencia.parlamentar="));
    assert!(!body.contains("transparencia.parlamentar=Deputado"));
}

#[tokio::test]
async fn aggregate_filters_politicians_after_extraction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reports_grouped.html")),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let filter = QueryFilter::new()
        .with_year(2019)
        .with_month(1)
        .with_politician("Deputada B");
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &filter,
        CrawlMode::Aggregate,
    )
    .await;

    // The request already returned everyone; only the match is recorded.
    assert_eq!(request_count(&server).await, 1);
    let reports = tree.reports("2019", "1").unwrap();
    assert_eq!(reports.keys().collect::<Vec<_>>(), vec!["Deputada B"]);
}

#[tokio::test]
async fn one_failed_combination_does_not_abort_the_crawl() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_string_contains("transparencia.mes=1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_string_contains("transparencia.mes=2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reports_grouped.html")),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let filter = QueryFilter::new().with_year(2019);
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &filter,
        CrawlMode::Aggregate,
    )
    .await;

    // The failed month keeps its key with an empty politician map.
    let failed = tree.reports("2019", "1").unwrap();
    assert!(failed.is_empty());
    let ok = tree.reports("2019", "2").unwrap();
    assert!(!ok.is_empty());
}

#[tokio::test]
async fn year_keys_match_the_effective_filter_exactly() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reports_grouped.html")),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let filter = QueryFilter::new().with_year(2019);
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &filter,
        CrawlMode::Aggregate,
    )
    .await;

    assert_eq!(tree.years().collect::<Vec<_>>(), vec!["2019"]);
}

#[tokio::test]
async fn unfiltered_crawl_visits_every_discovered_year() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reports_grouped.html")),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &QueryFilter::new(),
        CrawlMode::Aggregate,
    )
    .await;

    // 2020 has one month, 2019 has two.
    assert_eq!(request_count(&server).await, 3);
    assert_eq!(tree.years().collect::<Vec<_>>(), vec!["2020", "2019"]);
}

#[tokio::test]
async fn year_with_empty_scope_keeps_its_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("reports_grouped.html")),
        )
        .mount(&server)
        .await;

    // 2020's scope discovery failed, leaving it with no months or
    // politicians; 2019 is fully scoped.
    let mut domain = Domain {
        years: vec!["2020".to_string(), "2019".to_string()],
        ..Domain::default()
    };
    domain.scopes.insert("2020".to_string(), YearScope::default());
    domain.scopes.insert(
        "2019".to_string(),
        YearScope {
            months: vec!["1".to_string()],
            politicians: vec!["A".to_string()],
        },
    );

    let client = Client::new(&server.uri());
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &domain,
        &QueryFilter::new(),
        CrawlMode::Aggregate,
    )
    .await;

    // Year keys equal the effective years exactly: the empty-scope year
    // stays visible, with nothing under it.
    assert_eq!(tree.years().collect::<Vec<_>>(), vec!["2020", "2019"]);
    assert!(tree.reports("2020", "1").is_none());
    assert!(tree.reports("2019", "1").is_some());
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn per_politician_failure_keeps_the_politician_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_string_contains("transparencia.parlamentar=A"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_string_contains("transparencia.parlamentar=B"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("reports_flat.html")))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let filter = QueryFilter::new().with_year(2019).with_month(1);
    let tree = crawl(
        &client,
        &PortalConfig::default(),
        &test_domain(),
        &filter,
        CrawlMode::PerPolitician,
    )
    .await;

    assert_eq!(tree.entries("2019", "1", "A"), Some(&[][..]));
    assert_eq!(tree.entries("2019", "1", "B").unwrap().len(), 1);
}
