/*
[INPUT]:  Bearer token and task payloads
[OUTPUT]: Task entities and acknowledgements from the task endpoints
[POS]:    HTTP layer - task CRUD endpoints (require bearer auth)
[UPDATE]: When adding new task endpoints or changing their bodies
*/

use reqwest::Method;

use crate::http::{Result, TaskApiClient};
use crate::types::{
    AckMessage, CreateTaskRequest, EditTaskRequest, Task, ToggleCompletedRequest,
};

impl TaskApiClient {
    /// Fetch the full task collection
    ///
    /// GET /tasks
    pub async fn list_tasks(&self, token: &str) -> Result<Vec<Task>> {
        let builder = self.authorized_request(Method::GET, "/tasks", token)?;
        self.send_json(builder).await
    }

    /// Create a task and return the server's echo
    ///
    /// POST /tasks
    pub async fn create_task(&self, token: &str, req: &CreateTaskRequest) -> Result<Task> {
        let builder = self
            .authorized_request(Method::POST, "/tasks", token)?
            .json(req);
        self.send_json(builder).await
    }

    /// Set the completion flag, returning the authoritative entity
    ///
    /// PUT /tasks/{id}
    pub async fn set_completed(&self, token: &str, task_id: i64, completed: bool) -> Result<Task> {
        let endpoint = format!("/tasks/{task_id}");
        let builder = self
            .authorized_request(Method::PUT, &endpoint, token)?
            .json(&ToggleCompletedRequest { completed });
        self.send_json(builder).await
    }

    /// Rewrite the editable fields, returning the authoritative entity
    ///
    /// PUT /tasks/{id}
    pub async fn update_task(&self, token: &str, task_id: i64, req: &EditTaskRequest) -> Result<Task> {
        let endpoint = format!("/tasks/{task_id}");
        let builder = self
            .authorized_request(Method::PUT, &endpoint, token)?
            .json(req);
        self.send_json(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, token: &str, task_id: i64) -> Result<AckMessage> {
        let endpoint = format!("/tasks/{task_id}");
        let builder = self.authorized_request(Method::DELETE, &endpoint, token)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, TaskApiClient};
    use crate::types::CreateTaskRequest;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn task_body(id: i64, title: &str, completed: bool) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "description": null,
            "completed": completed,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "owner_id": 1,
        })
    }

    #[tokio::test]
    async fn test_list_tasks_sends_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                task_body(1, "first", false),
                task_body(2, "second", true),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");

        let tasks = client.list_tasks("abc").await.expect("list_tasks failed");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "first");
        assert!(tasks[1].completed);
    }

    #[tokio::test]
    async fn test_create_task_posts_null_description() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(header("authorization", "Bearer abc"))
            .and(body_json(serde_json::json!({
                "title": "buy milk",
                "description": null,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(task_body(3, "buy milk", false)))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");

        let task = client
            .create_task(
                "abc",
                &CreateTaskRequest {
                    title: "buy milk".to_string(),
                    description: None,
                },
            )
            .await
            .expect("create_task failed");

        assert_eq!(task.id, 3);
        assert_eq!(task.description, None);
    }

    #[tokio::test]
    async fn test_set_completed_targets_task_path() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/tasks/7"))
            .and(body_json(serde_json::json!({"completed": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(task_body(7, "seventh", true)))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskApiClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");

        let task = client
            .set_completed("abc", 7, true)
            .await
            .expect("set_completed failed");
        assert!(task.completed);
    }
}
