use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use inventory::config::{self, Settings};
use inventory::models::{AppState, InstanceFilter, DEFAULT_PAGE_SIZE};
use inventory::routes::build_app;
use inventory::services::{self, read_instances_file, InstanceStore};

#[derive(Parser)]
#[command(
    name = "inventory",
    author,
    version,
    about = "Instance inventory API",
    long_about = r#"Serve a read-only inventory of server instances from a JSON file.

The same queries the HTTP API answers can be run from the terminal against the data file.

Examples:
  1) Run the API:
      inventory serve --data-file data.json --port 8000
  2) Validate a data file:
      inventory check-data --data-file data.json
  3) Query instances:
      inventory instances list --keyword doe --page 2
      inventory instances show 12
"#,
    after_help = "Use `inventory <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Path to the instances JSON file (overrides INVENTORY_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides INVENTORY_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides INVENTORY_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Keep serving an empty collection when the data file fails to load
        #[arg(long, default_value_t = false)]
        degrade_on_load_error: bool,
    },
    /// Validate the data file and report how many records it holds
    CheckData,
    /// Query instances from the data file
    Instances {
        #[command(subcommand)]
        sub: InstanceCommands,
    },
}

#[derive(Subcommand)]
enum InstanceCommands {
    #[command(about = "List instances", long_about = "List instances with the same paging and filters as GET /api/v1/instances.")]
    List(ListArgs),
    /// Show a single instance as JSON
    Show { instance_id: i64 },
    /// Print distribution statistics
    Stats,
    /// List the distinct instance roles
    Roles,
}

#[derive(Args)]
struct ListArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p', default_value_t = 1)]
    page: i64,
    /// Items per page (1-100)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE as i64)]
    page_size: i64,
    /// Filter by manager user id
    #[arg(long)]
    user_id: Option<i64>,
    /// Filter by instance role id
    #[arg(long)]
    role_id: Option<i64>,
    /// Filter by IP address substring
    #[arg(long)]
    name: Option<String>,
    /// Match IP address, manager username or manager full name
    #[arg(long)]
    keyword: Option<String>,
    /// Filter by OS family value
    #[arg(long)]
    type_value: Option<i64>,
    /// Filter by GPU flag
    #[arg(long)]
    gpu: Option<bool>,
}

impl ListArgs {
    fn filter(&self) -> InstanceFilter {
        InstanceFilter {
            user_id: self.user_id,
            role_id: self.role_id,
            name: self.name.clone(),
            keyword: self.keyword.clone(),
            type_value: self.type_value,
            is_gpu_server: self.gpu,
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    tracing::error!(%e, "{}", context);
    eprintln!("{}: {}", yansi::Paint::red(context), e);
    process::exit(1);
}

async fn start_server(settings: Settings) {
    let addr: SocketAddr = match format!("{}:{}", settings.host, settings.port).parse() {
        Ok(a) => a,
        Err(e) => fail("Invalid host/port format", e),
    };
    let store = InstanceStore::new(settings.data_file.clone())
        .degrade_on_load_error(settings.degrade_on_load_error);
    // Load eagerly so a broken data file is reported at startup instead of on the first request.
    if let Err(e) = store.load().await {
        fail("Failed to load instances", e);
    }
    let state = AppState::new(store).with_cors_origins(settings.cors_origins.clone());
    let app = build_app(state);

    tracing::info!(%addr, data_file = %settings.data_file.display(), "Starting inventory server");
    println!(
        "{} {}",
        yansi::Paint::new("Inventory API running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
            {
                fail("Server error", e);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

async fn run_instances(store: &InstanceStore, sub: InstanceCommands) {
    match sub {
        InstanceCommands::List(args) => {
            let page = match services::list_instances(store, args.page, args.page_size, &args.filter()).await {
                Ok(p) => p,
                Err(e) => fail("Failed to list instances", e),
            };
            let mut table = new_table();
            table.set_header(vec!["ID", "IP address", "Manager", "OS", "Role", "GPU"]);
            for i in &page.data {
                table.add_row(vec![
                    i.id.to_string(),
                    i.name.clone(),
                    i.manager.full_name(),
                    i.os.display.clone(),
                    i.instance_role.name.clone(),
                    if i.is_gpu_server { "yes".into() } else { "no".into() },
                ]);
            }
            println!("\n{table}");

            let p = &page.pagination;
            println!(
                "\n{}",
                yansi::Paint::new(format!(
                    "Page {} of {} | Showing {} of {} matching instances",
                    p.page,
                    p.total_pages,
                    page.data.len(),
                    p.total_items
                ))
                .cyan()
            );
            if p.has_prev {
                println!(
                    "{} {}",
                    yansi::Paint::new("←").bold(),
                    yansi::Paint::new(format!("Previous page: inventory instances list --page {} --page-size {}", p.page - 1, p.page_size)).dim()
                );
            }
            if p.has_next {
                println!(
                    "{} {}",
                    yansi::Paint::new("→").bold(),
                    yansi::Paint::new(format!("Next page: inventory instances list --page {} --page-size {}", p.page + 1, p.page_size)).dim()
                );
            }
            println!();
        }
        InstanceCommands::Show { instance_id } => match services::get_instance(store, instance_id).await {
            Ok(instance) => match serde_json::to_string_pretty(&instance) {
                Ok(s) => println!("{}", s),
                Err(e) => fail("Failed to serialize instance", e),
            },
            Err(e) => fail("Failed to show instance", e),
        },
        InstanceCommands::Stats => {
            let stats = match services::get_statistics(store).await {
                Ok(s) => s,
                Err(e) => fail("Failed to compute statistics", e),
            };
            let mut table = new_table();
            table.set_header(vec!["Metric", "Value"]);
            table.add_row(vec!["Total".to_string(), stats.total.to_string()]);
            table.add_row(vec!["GPU servers".to_string(), stats.gpu_servers.to_string()]);
            table.add_row(vec!["Non-GPU servers".to_string(), stats.non_gpu_servers.to_string()]);
            table.add_row(vec!["GPU percentage".to_string(), format!("{:.2}%", stats.gpu_percentage)]);
            println!("\n{table}");
            for (title, dist) in [("OS", &stats.by_os_type), ("Role", &stats.by_role), ("Manager", &stats.by_manager)] {
                let mut table = new_table();
                table.set_header(vec![title, "Count"]);
                for (k, v) in dist {
                    table.add_row(vec![k.clone(), v.to_string()]);
                }
                println!("\n{table}");
            }
            println!();
        }
        InstanceCommands::Roles => {
            let roles = match services::list_roles(store).await {
                Ok(r) => r,
                Err(e) => fail("Failed to list roles", e),
            };
            let mut table = new_table();
            table.set_header(vec!["ID", "Name", "Slug"]);
            for r in &roles {
                table.add_row(vec![r.id.to_string(), r.name.clone(), r.slug.clone()]);
            }
            println!("\n{table}\n");
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    config::load_env_file(cli.env_file.as_deref());
    let mut settings = Settings::from_env();
    if let Some(path) = cli.data_file {
        settings.data_file = path;
    }

    match cli.command {
        None => start_server(settings).await,
        Some(Commands::Serve { host, port, degrade_on_load_error }) => {
            if let Some(h) = host {
                settings.host = h;
            }
            if let Some(p) = port {
                settings.port = p;
            }
            settings.degrade_on_load_error |= degrade_on_load_error;
            start_server(settings).await;
        }
        Some(Commands::CheckData) => match read_instances_file(&settings.data_file).await {
            Ok(instances) => {
                println!(
                    "{} ({} instances in {})",
                    yansi::Paint::new("Data file looks valid").green(),
                    instances.len(),
                    settings.data_file.display()
                );
            }
            Err(e) => fail("Data file is invalid", e),
        },
        Some(Commands::Instances { sub }) => {
            let store = InstanceStore::new(settings.data_file);
            run_instances(&store, sub).await;
        }
    }
}
