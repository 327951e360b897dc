use std::time::Instant;

use blogdeck_db::UserStore;
use blogdeck_models::{NewUser, UserRecord};
use fake::Fake;
use fake::faker::name::en::*;

/// Generates users with unique emails sharing one password hash.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<NewUser> {
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            NewUser {
                email: format!(
                    "{}.{}+{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    idx
                ),
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

pub async fn seed_users(
    store: &dyn UserStore,
    count: usize,
    password_hash: &str,
) -> anyhow::Result<Vec<UserRecord>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", count);

    let mut created = Vec::with_capacity(count);
    for user in generate_users(count, password_hash) {
        created.push(store.insert_one(user).await?);
    }

    println!(
        "   ✓ Inserted {} users in {:?}",
        created.len(),
        start_time.elapsed()
    );

    Ok(created)
}
