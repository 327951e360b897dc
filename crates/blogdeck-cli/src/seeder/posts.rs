use std::time::Instant;

use blogdeck_db::PostStore;
use blogdeck_models::{Comment, NewPost};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use fake::faker::name::en::Name;

/// Generates posts, cycling through `authors`. Posts are anonymous when
/// `authors` is empty.
pub fn generate_posts(count: usize, authors: &[String]) -> Vec<NewPost> {
    (0..count)
        .map(|idx| NewPost {
            title: Sentence(3..8).fake(),
            content: Paragraph(2..5).fake(),
            author: (!authors.is_empty()).then(|| authors[idx % authors.len()].clone()),
        })
        .collect()
}

pub fn generate_comments(count: usize) -> Vec<Comment> {
    (0..count)
        .map(|_| {
            let words: Vec<String> = Words(4..12).fake();
            Comment::new(Name().fake(), words.join(" "))
        })
        .collect()
}

/// Inserts `count` posts with `comments_per_post` comments each.
///
/// Returns the number of posts and comments written.
pub async fn seed_posts(
    store: &dyn PostStore,
    count: usize,
    comments_per_post: usize,
    authors: &[String],
) -> anyhow::Result<(usize, usize)> {
    let start_time = Instant::now();
    println!(
        "📝 Seeding {} posts ({} comments each)...",
        count, comments_per_post
    );

    let mut comments = 0;
    for new_post in generate_posts(count, authors) {
        let post = store.insert_one(new_post).await?;
        for comment in generate_comments(comments_per_post) {
            if store.push_comment(post.id, &comment).await?.matched() {
                comments += 1;
            }
        }
    }

    println!(
        "   ✓ Inserted {} posts and {} comments in {:?}",
        count,
        comments,
        start_time.elapsed()
    );

    Ok((count, comments))
}
