//! Project and project history endpoint tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{parse_body, request, TestApp};

const STRUCTURE: &str = "{ \"nodes\": [] }";

mod test_create_project {
    use super::*;

    #[tokio::test]
    async fn test_create_project_returns_201_with_assigned_id() {
        let app = TestApp::new()
            .with_member(1)
            .with_curriculum(2)
            .with_next_project_id(10);

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/members/1/projects",
                Some(json!({"curriculumId": 2})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = parse_body(resp).await;
        assert_eq!(body["id"], 10);
        assert_eq!(body["curriculumId"], 2);
        assert_eq!(app.projects.saved().len(), 1);
    }

    #[tokio::test]
    async fn test_create_project_unknown_member_returns_404() {
        let app = TestApp::new().with_curriculum(1);

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/members/99/projects",
                Some(json!({"curriculumId": 1})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "MEMBER_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Member not found");
        assert!(app.projects.saved().is_empty());
    }

    #[tokio::test]
    async fn test_create_project_unknown_curriculum_returns_404() {
        let app = TestApp::new().with_member(1);

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/members/1/projects",
                Some(json!({"curriculumId": 5})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "CURRICULUM_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_project_zero_curriculum_id_is_lookup_failure() {
        let app = TestApp::new().with_member(1);

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/members/1/projects",
                Some(json!({"curriculumId": 0})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "CURRICULUM_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Curriculum not found");
        assert!(app.projects.saved().is_empty());
    }

    #[tokio::test]
    async fn test_create_project_invalid_body_returns_400() {
        let app = TestApp::new().with_member(1).with_curriculum(2);

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/members/1/projects",
                Some(json!({"curriculumId": "two"})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(app.projects.saved().is_empty());
    }
}

mod test_list_projects {
    use super::*;

    #[tokio::test]
    async fn test_list_projects_returns_owned_projects() {
        let app = TestApp::new()
            .with_member(5)
            .with_member(6)
            .with_project(8, 5)
            .with_project(9, 6);

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/members/5/projects", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = parse_body(resp).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 8);
    }

    #[tokio::test]
    async fn test_list_projects_empty() {
        let app = TestApp::new().with_member(5);

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/members/5/projects", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(parse_body(resp).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_projects_unknown_member_returns_404() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/members/5/projects", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "MEMBER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_project() {
        let app = TestApp::new().with_project(8, 5);

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/projects/8", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(parse_body(resp).await["id"], 8);

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/projects/9", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

mod test_project_histories {
    use super::*;

    #[tokio::test]
    async fn test_save_project_echoes_structure() {
        let app = TestApp::new().with_project(3, 1).with_next_history_id(7);

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/projects/3/histories",
                Some(json!({"structure": STRUCTURE})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = parse_body(resp).await;
        assert_eq!(body["id"], 7);
        assert_eq!(body["structure"], STRUCTURE);
    }

    #[tokio::test]
    async fn test_save_project_unknown_project_returns_404() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/projects/42/histories",
                Some(json!({"structure": STRUCTURE})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
        assert!(app.project_histories.saved().is_empty());
    }

    #[tokio::test]
    async fn test_save_project_empty_structure_returns_400() {
        let app = TestApp::new().with_project(3, 1);

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/projects/3/histories",
                Some(json!({"structure": ""})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(app.project_histories.saved().is_empty());
    }

    #[tokio::test]
    async fn test_history_list_and_detail_after_saves() {
        let app = TestApp::new().with_project(3, 1).with_next_history_id(20);
        let router = app.router();

        for structure in ["{\"v\":1}", "{\"v\":2}"] {
            let resp = router
                .clone()
                .oneshot(request(
                    Method::POST,
                    "/v1/projects/3/histories",
                    Some(json!({"structure": structure})),
                ))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let resp = router
            .clone()
            .oneshot(request(Method::GET, "/v1/projects/3/histories", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let list = parse_body(resp).await;
        let items = list.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 21);
        assert_eq!(items[1]["id"], 20);
        assert!(items.iter().all(|h| h["projectId"] == 3));
        assert!(items.iter().all(|h| h.get("structure").is_none()));

        let resp = router
            .oneshot(request(Method::GET, "/v1/project-histories/20", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let detail = parse_body(resp).await;
        assert_eq!(detail["id"], 20);
        assert_eq!(detail["structure"], "{\"v\":1}");
    }

    #[tokio::test]
    async fn test_history_list_unknown_project_returns_404() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/projects/42/histories", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_history_detail_unknown_returns_404() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/project-histories/100", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_HISTORY_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Project history not found");
    }
}
