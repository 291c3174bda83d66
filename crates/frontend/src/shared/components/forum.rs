use leptos::prelude::*;

use crate::shared::data::catalog::FORUM_POSTS;
use crate::shared::icons::icon;

/// Read-only community feed seeded from the catalog data. There is no
/// backend, so the "New Post" button is presentation only.
#[component]
pub fn CommunityForum() -> impl IntoView {
    view! {
        <div class="forum">
            <div class="forum__header">
                <p>"Join our community discussions"</p>
                <button class="button button--primary">"New Post"</button>
            </div>

            <div class="forum__posts">
                {FORUM_POSTS
                    .iter()
                    .map(|post| {
                        view! {
                            <div class="card forum-post">
                                <div class="forum-post__author">
                                    <img src=post.avatar alt=post.author />
                                    <div>
                                        <h4>{post.author}</h4>
                                        <span class="forum-post__time">{post.time_ago}</span>
                                    </div>
                                </div>
                                <h3 class="forum-post__title">{post.title}</h3>
                                <p class="forum-post__content">{post.content}</p>
                                <div class="forum-post__actions">
                                    <button>{icon("heart")} {post.likes}</button>
                                    <button>{icon("message")} {post.replies}</button>
                                    <button>{icon("share")} "Share"</button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
