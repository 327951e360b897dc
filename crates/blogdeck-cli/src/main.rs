use anyhow::{Context, bail};
use blogdeck_cli::seeder::{self, SeedConfig};
use blogdeck_config::PasswordConfig;
use blogdeck_core::PasswordHasher;
use blogdeck_db::{PgPostStore, PgPool, PgUserStore, StoreError, UserStore};
use blogdeck_models::NewUser;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "blogdeck-cli")]
#[command(about = "Blogdeck CLI - Administrative tools for Blogdeck", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users, posts, and comments
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of posts to create
        #[arg(short = 'p', long, default_value = "20")]
        posts: usize,

        /// Number of comments per post
        #[arg(short = 'c', long, default_value = "3")]
        comments: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = blogdeck_db::init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    blogdeck_db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let hasher = PasswordHasher::new(PasswordConfig::from_env().bcrypt_cost);

    match cli.command {
        Commands::CreateUser { email, password } => {
            handle_create_user(pool, &hasher, email, password).await
        }
        Commands::Seed {
            users,
            posts,
            comments,
        } => {
            let config = SeedConfig::new(users)
                .with_posts(posts)
                .with_comments(comments);
            handle_seed(pool, &hasher, config).await
        }
    }
}

async fn handle_create_user(
    pool: PgPool,
    hasher: &PasswordHasher,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    if email.is_empty() || password.is_empty() {
        bail!("Email and password must not be empty");
    }

    let password_hash = hasher.hash(&password).await.map_err(|e| e.error)?;
    let users = PgUserStore::new(pool);

    match users
        .insert_one(NewUser {
            email: email.clone(),
            password_hash,
        })
        .await
    {
        Ok(user) => {
            println!("\n✅ User created successfully!");
            println!("   Email: {}", user.email);
            println!("   ID: {}", user.id);
            Ok(())
        }
        Err(StoreError::DuplicateEmail) => bail!("A user with email {} already exists", email),
        Err(e) => Err(e.into()),
    }
}

async fn handle_seed(
    pool: PgPool,
    hasher: &PasswordHasher,
    config: SeedConfig,
) -> anyhow::Result<()> {
    let users = PgUserStore::new(pool.clone());
    let posts = PgPostStore::new(pool);

    let summary = seeder::seed_all(&users, &posts, hasher, config)
        .await
        .context("Error seeding database")?;

    println!(
        "   {} users, {} posts, {} comments",
        summary.users, summary.posts, summary.comments
    );
    Ok(())
}
