//! Handlers for the API index and the unknown-path fallback.

use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;

/// GET /api
///
/// Serve a JSON description of every endpoint the API exposes.
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "GET /api": {
            "description": "Serves a JSON representation of all available endpoints of the API."
        },
        "GET /api/topics": {
            "description": "Serves an array of all topics.",
            "queries": [],
            "exampleResponse": {
                "topics": [{ "slug": "football", "description": "Footie!" }]
            }
        },
        "POST /api/topics": {
            "description": "Adds a topic and serves the created topic.",
            "queries": [],
            "exampleRequest": { "slug": "gardening", "description": "Growing things." },
            "exampleResponse": {
                "topic": { "slug": "gardening", "description": "Growing things." }
            }
        },
        "GET /api/articles": {
            "description": "Serves a page of article summaries plus a total_count of all matching articles.",
            "queries": ["topic", "sort_by", "order", "limit", "p"],
            "exampleResponse": {
                "articles": [{
                    "article_id": 1,
                    "title": "Seafood substitutions are increasing",
                    "topic": "cooking",
                    "author": "weegembump",
                    "created_at": "2018-05-30T15:59:13Z",
                    "votes": 0,
                    "comment_count": 6
                }],
                "total_count": 1
            }
        },
        "POST /api/articles": {
            "description": "Adds an article and serves the created article.",
            "queries": [],
            "exampleRequest": {
                "author": "weegembump",
                "title": "Seafood substitutions are increasing",
                "body": "Text from the article..",
                "topic": "cooking"
            },
            "exampleResponse": {
                "article": {
                    "article_id": 1,
                    "title": "Seafood substitutions are increasing",
                    "topic": "cooking",
                    "author": "weegembump",
                    "body": "Text from the article..",
                    "created_at": "2018-05-30T15:59:13Z",
                    "votes": 0,
                    "comment_count": 0
                }
            }
        },
        "GET /api/articles/:article_id": {
            "description": "Serves a single article with its comment count.",
            "queries": [],
            "exampleResponse": {
                "article": {
                    "article_id": 1,
                    "title": "Seafood substitutions are increasing",
                    "topic": "cooking",
                    "author": "weegembump",
                    "body": "Text from the article..",
                    "created_at": "2018-05-30T15:59:13Z",
                    "votes": 0,
                    "comment_count": 6
                }
            }
        },
        "PATCH /api/articles/:article_id": {
            "description": "Applies an inc_votes delta to an article and serves the updated row.",
            "queries": [],
            "exampleRequest": { "inc_votes": 1 },
            "exampleResponse": {
                "article": {
                    "article_id": 1,
                    "title": "Seafood substitutions are increasing",
                    "topic": "cooking",
                    "author": "weegembump",
                    "body": "Text from the article..",
                    "created_at": "2018-05-30T15:59:13Z",
                    "votes": 1
                }
            }
        },
        "DELETE /api/articles/:article_id": {
            "description": "Deletes an article and its comments. Serves no content.",
            "queries": []
        },
        "GET /api/articles/:article_id/comments": {
            "description": "Serves the comments on an article, newest first.",
            "queries": [],
            "exampleResponse": {
                "comments": [{
                    "comment_id": 31,
                    "votes": 11,
                    "created_at": "2020-09-26T16:16:00Z",
                    "author": "weegembump",
                    "body": "Sit sequi obcaecati quo."
                }]
            }
        },
        "POST /api/articles/:article_id/comments": {
            "description": "Adds a comment to an article and serves the created comment.",
            "queries": [],
            "exampleRequest": { "username": "weegembump", "body": "Great read." },
            "exampleResponse": {
                "comment": {
                    "comment_id": 32,
                    "article_id": 1,
                    "author": "weegembump",
                    "body": "Great read.",
                    "votes": 0,
                    "created_at": "2020-09-26T17:01:00Z"
                }
            }
        },
        "PATCH /api/comments/:comment_id": {
            "description": "Applies an inc_votes delta to a comment and serves the updated row.",
            "queries": [],
            "exampleRequest": { "inc_votes": -1 }
        },
        "DELETE /api/comments/:comment_id": {
            "description": "Deletes a comment. Serves no content.",
            "queries": []
        },
        "GET /api/users": {
            "description": "Serves an array of all usernames.",
            "queries": [],
            "exampleResponse": {
                "users": [{ "username": "weegembump" }]
            }
        },
        "GET /api/users/:username": {
            "description": "Serves a single user.",
            "queries": [],
            "exampleResponse": {
                "user": {
                    "username": "weegembump",
                    "name": "Gemma Bump",
                    "avatar_url": "https://example.test/avatars/weegembump.jpg"
                }
            }
        }
    }))
}

/// Fallback for requests matching no route.
pub async fn path_not_found() -> ApiError {
    ApiError::NotFound("Path not found.")
}
