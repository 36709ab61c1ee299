//! Shared fixtures for integration tests: a temp uploads tree plus a
//! fully wired in-process server.

use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

use folio_server::{
    AppState, create_app,
    infra::config::{
        Config, ConfigMetadata, CorsConfig, ServerConfig, UploadsConfig,
        default_cors_headers, default_cors_methods,
    },
};

pub struct TestApp {
    pub server: TestServer,
    // Keeps the uploads tree alive for the duration of the test.
    pub uploads: TempDir,
}

pub fn build_test_app() -> TestApp {
    let uploads = TempDir::new().expect("create temp uploads tree");
    std::fs::create_dir_all(uploads.path().join("projects")).unwrap();
    std::fs::create_dir_all(uploads.path().join("tech")).unwrap();

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        uploads: UploadsConfig {
            root: uploads.path().to_path_buf(),
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
        },
        metadata: ConfigMetadata::default(),
    };

    let state = AppState::new(Arc::new(config));
    let server = TestServer::new(create_app(state)).expect("build test server");

    TestApp { server, uploads }
}

impl TestApp {
    pub fn add_project(&self, id: &str, files: &[(&str, &[u8])]) {
        let dir = self.uploads.path().join("projects").join(id);
        std::fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            std::fs::write(dir.join(name), content).unwrap();
        }
    }

    pub fn add_showcase(&self, id: &str, files: &[(&str, &str)]) {
        let dir = self.uploads.path().join("tech").join(id);
        std::fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            std::fs::write(dir.join(name), content).unwrap();
        }
    }
}
