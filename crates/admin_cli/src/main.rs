use std::{error::Error, io::Write};

use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};
use mongodb::{
    Client,
    bson::{Document, doc},
};

#[derive(Parser, Debug)]
#[command(name = "money_map_admin")]
#[command(about = "Admin utilities for Money Map (bootstrap the database)")]
struct Cli {
    /// MongoDB connection string (also read from `MONGO_URL`).
    #[arg(long, env = "MONGO_URL", default_value = "mongodb://localhost:27017")]
    mongo_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Db(Db),
}

#[derive(Args, Debug)]
struct Db {
    #[command(subcommand)]
    command: DbCommand,
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Create the server admin, the application database and its user.
    Init(DbInitArgs),
}

#[derive(Args, Debug)]
struct DbInitArgs {
    /// Application database name.
    #[arg(long, default_value = "money_map")]
    db_name: String,
    /// Server administrator account to create.
    #[arg(long, default_value = "admin")]
    admin_user: String,
    /// Application account granted readWrite on the app database.
    #[arg(long, default_value = "money_map")]
    app_user: String,
    /// Admin password; prompted interactively when absent.
    #[arg(long, env = "MONGO_ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,
    /// App user password; prompted interactively when absent.
    #[arg(long, env = "MONGO_APP_PASSWORD", hide_env_values = true)]
    app_password: Option<String>,
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, Box<dyn Error + Send + Sync>> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn prompt_password(prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let _raw = RawModeGuard::enter()?;

    let mut out = std::io::stderr();
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(prompt)
    )?;
    out.flush()?;

    let mut buf = String::new();
    loop {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        else {
            continue;
        };

        match code {
            KeyCode::Enter => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                break;
            }
            KeyCode::Backspace => {
                if buf.pop().is_some() {
                    execute!(out, cursor::MoveLeft(1), Print(" "), cursor::MoveLeft(1))?;
                    out.flush()?;
                }
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                return Err("interrupted".into());
            }
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                buf.push(ch);
                execute!(out, Print("*"))?;
                out.flush()?;
            }
            _ => {}
        }
    }

    Ok(buf)
}

fn prompt_password_twice(account: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let mut out = std::io::stderr();
    for _ in 0..3 {
        let p1 = prompt_password(&format!("Password for {account}: "))?;
        if p1.is_empty() {
            execute!(
                out,
                cursor::MoveToColumn(0),
                terminal::Clear(ClearType::CurrentLine),
                Print("Password must not be empty.\r\n")
            )?;
            continue;
        }

        let p2 = prompt_password("Confirm password: ")?;
        if p1 == p2 {
            return Ok(p1);
        }

        execute!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print("Passwords do not match. Try again.\r\n")
        )?;
    }

    Err("too many attempts".into())
}

async fn init_db(client: &Client, args: &DbInitArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let admin_password = match &args.admin_password {
        Some(password) => password.clone(),
        None => prompt_password_twice(&args.admin_user)?,
    };
    let app_password = match &args.app_password {
        Some(password) => password.clone(),
        None => prompt_password_twice(&args.app_user)?,
    };

    // Server administrator lives in the admin database.
    client
        .database("admin")
        .run_command(doc! {
            "createUser": &args.admin_user,
            "pwd": admin_password,
            "roles": [
                { "role": "root", "db": "admin" },
                "userAdminAnyDatabase",
                "readWriteAnyDatabase",
            ],
        })
        .await?;
    println!("created server admin: {}", args.admin_user);

    // Mongo only materializes a database once it holds a document, so
    // park a placeholder in the users collection while the app user is
    // created, then remove it.
    let app_db = client.database(&args.db_name);
    let users = app_db.collection::<Document>("users");
    users
        .insert_one(doc! { "_id": 1, "value": "temp data" })
        .await?;

    app_db
        .run_command(doc! {
            "createUser": &args.app_user,
            "pwd": app_password,
            "roles": [
                { "role": "readWrite", "db": &args.db_name },
            ],
        })
        .await?;
    println!("created app user: {} ({})", args.app_user, args.db_name);

    users.delete_one(doc! { "_id": 1 }).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let client = Client::with_uri_str(&cli.mongo_url).await?;

    match cli.command {
        Command::Db(Db {
            command: DbCommand::Init(args),
        }) => {
            if let Err(err) = init_db(&client, &args).await {
                eprintln!("database init failed: {err}");
                std::process::exit(1);
            }
            println!("database ready: {}", args.db_name);
        }
    }

    Ok(())
}
