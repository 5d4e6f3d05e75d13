// tests/workflow_test.rs

use course_dl::browser::fake::FakeBrowser;
use course_dl::client::DocumentClient;
use course_dl::config::AppConfig;
use course_dl::constants;
use course_dl::downloader::DocumentDownloader;
use course_dl::error::AppError;
use course_dl::models::{Credentials, Portal, SiteDescriptor};
use course_dl::{RunContext, workflows};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::{TempDir, tempdir};

const MOODLE_COURSE: &str = "https://moodle.uni-mainz.de/course/view.php?id=7";
const READER_LIBRARY: &str = "https://reader.uni-mainz.de/Algebra/Forms/AllItems.aspx";
const FOREIGN_SITE: &str = "https://ilias.example.org/course/1";
const LANDING: &str = "https://landing.test/";

fn context(export_cookies: Option<PathBuf>) -> RunContext {
    let config = Arc::new(AppConfig::default());
    RunContext {
        downloader: DocumentDownloader::new(DocumentClient::new(&config).expect("Failed to create client")),
        config,
        credentials: Credentials {
            username: "jdoe".into(),
            password: Some("hunter2".into()),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        },
        overwrite: false,
        export_cookies,
    }
}

fn site(url: &str, dir: &Path) -> SiteDescriptor {
    SiteDescriptor { url: url.into(), dir: dir.to_path_buf() }
}

fn moodle_page(server_url: &str) -> String {
    format!(
        r#"<ul><li class="activity resource modtype_resource">
             <a href="{}/moodle/resource/1"><span class="instancename">Lecture 01<span class="accesshide"> File</span></span></a>
           </li></ul>"#,
        server_url
    )
}

fn reader_page(server_url: &str) -> String {
    format!(
        r#"<table><tr><td><a class="ms-listlink ms-draggable" href="{}/Algebra/Week%201.pdf">Week 1</a></td></tr></table>"#,
        server_url
    )
}

/// Browser where both logins land on a page greeting the user and both session cookies are set.
fn logged_in_browser(server_url: &str) -> FakeBrowser {
    FakeBrowser::new()
        .with_page(LANDING, "<html><body>Welcome, Jane Doe</body></html>")
        .redirect_on_submit(LANDING)
        .with_page(MOODLE_COURSE, &moodle_page(server_url))
        .with_page(READER_LIBRARY, &reader_page(server_url))
        .with_cookie(constants::moodle::SESSION_COOKIE, "m-session")
        .with_cookie(constants::reader::SESSION_COOKIE, "r-session")
}

fn dirs() -> (TempDir, PathBuf, PathBuf) {
    let root = tempdir().unwrap();
    let moodle_dir = root.path().join("moodle");
    let reader_dir = root.path().join("reader");
    fs::create_dir(&moodle_dir).unwrap();
    fs::create_dir(&reader_dir).unwrap();
    (root, moodle_dir, reader_dir)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_visits_moodle_then_reader_and_downloads() {
    let mut server = mockito::Server::new_async().await;
    let moodle_file = server
        .mock("GET", "/moodle/resource/1")
        .match_header("cookie", "MoodleSession=m-session")
        .with_body("moodle pdf")
        .expect(1)
        .create_async()
        .await;
    let reader_file = server
        .mock("GET", "/Algebra/Week%201.pdf")
        .match_header("cookie", "EdgeAccessCookie=r-session")
        .with_body("reader pdf")
        .expect(1)
        .create_async()
        .await;

    let (_root, moodle_dir, reader_dir) = dirs();
    // Listed Reader first on purpose: Moodle is still processed first
    let sites = vec![
        site(READER_LIBRARY, &reader_dir),
        site(FOREIGN_SITE, &moodle_dir),
        site(MOODLE_COURSE, &moodle_dir),
    ];
    let browser = logged_in_browser(&server.url());

    let summary = workflows::run(&browser, &sites, &context(None)).await.unwrap();

    assert_eq!(
        browser.navigations(),
        vec![
            Portal::Moodle.login_url().to_string(),
            MOODLE_COURSE.to_string(),
            Portal::Reader.login_url().to_string(),
            READER_LIBRARY.to_string(),
        ]
    );
    assert!(browser.is_closed());
    assert!(browser.events().contains(&"keys userNameInput UNI-MAINZ\\jdoe".to_string()));
    assert!(browser.events().contains(&"keys username jdoe".to_string()));

    assert_eq!(summary.sites_done, 2);
    assert_eq!(summary.unmatched, vec![FOREIGN_SITE.to_string()]);
    assert!(summary.unverified_logins.is_empty());
    assert_eq!(summary.report.written, 2);

    assert_eq!(fs::read_to_string(moodle_dir.join("lecture_01.pdf")).unwrap(), "moodle pdf");
    assert_eq!(fs::read_to_string(reader_dir.join("week1.pdf")).unwrap(), "reader pdf");
    moodle_file.assert_async().await;
    reader_file.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rerun_skips_existing_files() {
    let mut server = mockito::Server::new_async().await;
    let never = server.mock("GET", mockito::Matcher::Any).expect(0).create_async().await;

    let (_root, moodle_dir, reader_dir) = dirs();
    fs::write(moodle_dir.join("lecture_01.pdf"), "kept").unwrap();
    fs::write(reader_dir.join("week1.pdf"), "kept").unwrap();
    let sites = vec![site(MOODLE_COURSE, &moodle_dir), site(READER_LIBRARY, &reader_dir)];
    let browser = logged_in_browser(&server.url());

    let summary = workflows::run(&browser, &sites, &context(None)).await.unwrap();

    assert_eq!(summary.report.skipped, 2);
    assert_eq!(summary.report.written, 0);
    assert_eq!(fs::read_to_string(moodle_dir.join("lecture_01.pdf")).unwrap(), "kept");
    never.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_session_cookie_aborts_and_closes_browser() {
    let mut server = mockito::Server::new_async().await;
    let never = server.mock("GET", mockito::Matcher::Any).expect(0).create_async().await;

    let (_root, moodle_dir, reader_dir) = dirs();
    let sites = vec![site(MOODLE_COURSE, &moodle_dir), site(READER_LIBRARY, &reader_dir)];
    let browser = FakeBrowser::new()
        .with_page(LANDING, "Welcome, Jane Doe")
        .redirect_on_submit(LANDING)
        .with_page(MOODLE_COURSE, &moodle_page(&server.url()))
        .with_cookie(constants::reader::SESSION_COOKIE, "r-session");

    let err = workflows::run(&browser, &sites, &context(None)).await.unwrap_err();

    assert!(matches!(err, AppError::CookieNotFound { ref name } if name == "MoodleSession"));
    assert!(browser.is_closed());
    // Nothing after the failing portal was touched
    assert_eq!(browser.navigations(), vec![Portal::Moodle.login_url().to_string()]);
    never.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_login_field_aborts_and_closes_browser() {
    let (_root, moodle_dir, _reader_dir) = dirs();
    let browser = FakeBrowser::new().without_element(constants::moodle::PASSWORD_FIELD_ID);

    let result = workflows::run(&browser, &[site(MOODLE_COURSE, &moodle_dir)], &context(None)).await;

    assert!(result.is_err());
    assert!(browser.is_closed());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unverified_login_still_downloads() {
    let mut server = mockito::Server::new_async().await;
    let file = server
        .mock("GET", "/moodle/resource/1")
        .with_body("pdf")
        .expect(1)
        .create_async()
        .await;

    let (_root, moodle_dir, _reader_dir) = dirs();
    let browser = FakeBrowser::new()
        .with_page(LANDING, "<html><body>Dashboard</body></html>")
        .redirect_on_submit(LANDING)
        .with_page(MOODLE_COURSE, &moodle_page(&server.url()))
        .with_cookie(constants::moodle::SESSION_COOKIE, "m-session");

    let summary = workflows::run(&browser, &[site(MOODLE_COURSE, &moodle_dir)], &context(None))
        .await
        .unwrap();

    assert_eq!(summary.unverified_logins, vec![Portal::Moodle]);
    assert_eq!(summary.report.written, 1);
    file.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_only_unknown_sites_opens_no_portal() {
    let (_root, moodle_dir, _reader_dir) = dirs();
    let browser = FakeBrowser::new();

    let summary = workflows::run(&browser, &[site(FOREIGN_SITE, &moodle_dir)], &context(None))
        .await
        .unwrap();

    assert!(browser.navigations().is_empty());
    assert!(browser.is_closed());
    assert_eq!(summary.sites_done, 0);
    assert_eq!(summary.unmatched.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cookies_are_exported_once_per_cookie() {
    let mut server = mockito::Server::new_async().await;
    server.mock("GET", mockito::Matcher::Any).with_body("pdf").create_async().await;

    let (root, moodle_dir, reader_dir) = dirs();
    let export = root.path().join("cookies.txt");
    let sites = vec![site(MOODLE_COURSE, &moodle_dir), site(READER_LIBRARY, &reader_dir)];
    let browser = logged_in_browser(&server.url());

    workflows::run(&browser, &sites, &context(Some(export.clone()))).await.unwrap();

    let exported = fs::read_to_string(&export).unwrap();
    assert_eq!(
        exported,
        "example.test\tFalse\t/\tFalse\t0\tMoodleSession\tm-session\n\
         example.test\tFalse\t/\tFalse\t0\tEdgeAccessCookie\tr-session\n"
    );
}
