use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use blog_service::domain::post::errors::PostError;
use blog_service::domain::post::models::NewPost;
use blog_service::domain::post::models::Post;
use blog_service::domain::post::models::PostId;
use blog_service::domain::post::ports::PostRepository;
use blog_service::domain::post::service::PostService;
use blog_service::domain::session::service::SessionService;
use blog_service::domain::user::errors::UserError;
use blog_service::domain::user::models::NewUser;
use blog_service::domain::user::models::User;
use blog_service::domain::user::models::UserId;
use blog_service::domain::user::ports::UserRepository;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use chrono::Utc;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server backed by in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub users: Arc<InMemoryUserRepository>,
    pub posts: Arc<InMemoryPostRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let posts = Arc::new(InMemoryPostRepository::default());
        let authenticator =
            Arc::new(Authenticator::new(TEST_SECRET).expect("Failed to create authenticator"));

        // Minimal Argon2 cost keeps the suite fast
        let hasher = PasswordHasher::with_params(1024, 1, 1).expect("Invalid Argon2 params");

        let state = AppState {
            user_service: Arc::new(UserService::with_password_hasher(
                Arc::clone(&users),
                hasher,
            )),
            post_service: Arc::new(PostService::new(Arc::clone(&posts))),
            session_service: Arc::new(SessionService::new(
                Arc::clone(&users),
                Arc::clone(&authenticator),
            )),
            authenticator: Arc::clone(&authenticator),
        };

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            users,
            posts,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user through the API and return its id
    pub async fn register(&self, firstname: &str, lastname: &str, email: &str, password: &str) -> i64 {
        let response = self
            .post("/users")
            .json(&json!({
                "firstname": firstname,
                "lastname": lastname,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing user id")
    }

    /// Sign in through the API and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }

    /// Register a user and sign in, returning (user id, token)
    pub async fn signed_in(&self, firstname: &str, email: &str) -> (i64, String) {
        let id = self.register(firstname, "Tester", email, "password").await;
        let token = self.login(email, "password").await;
        (id, token)
    }

    /// Publish a post as `author_id` and return its id
    pub async fn publish(&self, token: &str, author_id: i64, title: &str) -> i64 {
        let response = self
            .post("/posts")
            .bearer_auth(token)
            .json(&json!({
                "title": title,
                "content": "Some content",
                "author_id": author_id
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing post id")
    }
}

/// User store keyed by id, enforcing unique emails like the database does
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn password_hash(&self, id: i64) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .map(|user| user.password_hash.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let id = users.keys().next_back().copied().unwrap_or(0) + 1;
        let now = Utc::now();
        let created = User {
            id: UserId(id),
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn list(&self, limit: i64) -> Result<Vec<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        match users.get_mut(&user.id.0) {
            Some(stored) => {
                *stored = user.clone();
                Ok(user)
            }
            None => Err(UserError::NotFound(user.id)),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), UserError> {
        self.users
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(UserError::NotFound(id))
    }
}

/// Post store keyed by id, enforcing unique titles like the database does
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<BTreeMap<i64, Post>>,
}

impl InMemoryPostRepository {
    pub fn get(&self, id: i64) -> Option<Post> {
        self.posts.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let mut posts = self.posts.lock().unwrap();
        if posts.values().any(|p| p.title == post.title) {
            return Err(PostError::TitleAlreadyExists(post.title));
        }

        let id = posts.keys().next_back().copied().unwrap_or(0) + 1;
        let now = Utc::now();
        let created = Post {
            id: PostId(id),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: now,
            updated_at: now,
        };
        posts.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError> {
        Ok(self.posts.lock().unwrap().get(&id.0).cloned())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Post>, PostError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .values()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, post: Post) -> Result<Post, PostError> {
        let mut posts = self.posts.lock().unwrap();
        if posts
            .values()
            .any(|p| p.id != post.id && p.title == post.title)
        {
            return Err(PostError::TitleAlreadyExists(post.title));
        }
        match posts.get_mut(&post.id.0) {
            Some(stored) => {
                *stored = post.clone();
                Ok(post)
            }
            None => Err(PostError::NotFound(post.id)),
        }
    }

    async fn delete(&self, id: PostId) -> Result<(), PostError> {
        self.posts
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(PostError::NotFound(id))
    }
}
