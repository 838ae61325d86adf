#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use presence::{
    io::{self, JsonFileFeed},
    leave::{self, LeaveSummary},
    model::{parse_time_of_day, LeaveBalance, NotificationId, ShiftDefinition},
    notification::{NotificationAction, NotificationStore},
    shift::Punctuality,
    LeavePolicy,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI RH minimaliste : congés, shifts, notifications
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Valider un brouillon de demande de congé
    Validate {
        /// Brouillon JSON (clés camelCase)
        #[arg(long)]
        draft: String,
        /// Soldes CSV `leave_type,days`
        #[arg(long)]
        balance: Option<String>,
        /// Politique JSON (seuils)
        #[arg(long)]
        policy: Option<String>,
        /// Date du jour (YYYY-MM-DD), par défaut aujourd'hui (UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Export CSV des erreurs (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Compter les jours calendaires et ouvrés d'une plage
    Days {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        half_day: bool,
    },

    /// Prévisualiser un shift (durée, pause, retard, heures sup)
    Shift {
        #[arg(long, default_value = "shift")]
        name: String,
        /// HH:MM
        #[arg(long, value_parser = parse_time_of_day)]
        start: NaiveTime,
        /// HH:MM (avant le début => lendemain)
        #[arg(long, value_parser = parse_time_of_day)]
        end: NaiveTime,
        #[arg(long, default_value_t = 0)]
        break_minutes: u32,
        #[arg(long, default_value_t = 0)]
        grace_minutes: u32,
        #[arg(long, value_parser = parse_time_of_day)]
        check_in: Option<NaiveTime>,
        #[arg(long, value_parser = parse_time_of_day)]
        check_out: Option<NaiveTime>,
    },

    /// Appliquer des actions à une liste de notifications
    Notifications {
        /// Liste JSON de notifications
        #[arg(long)]
        input: String,
        #[arg(long)]
        mark_read: Vec<String>,
        #[arg(long)]
        remove: Vec<String>,
        #[arg(long)]
        mark_all_read: bool,
        #[arg(long)]
        clear: bool,
        #[arg(long)]
        out_json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Validate {
            draft,
            balance,
            policy,
            today,
            report,
        } => {
            let draft = io::load_draft_json(draft)?;
            let balance = match balance {
                Some(path) => io::import_balance_csv(path)?,
                None => LeaveBalance::new(),
            };
            let policy = match policy {
                Some(path) => io::load_policy_json(path)?,
                None => LeavePolicy::default(),
            };
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let validation = leave::validate_with(&policy, &draft, &balance, today);
            if let Some(path) = report {
                io::export_validation_csv(path, &validation)?;
            }
            if validation.valid {
                println!("OK: request is valid");
                if let Some(summary) = LeaveSummary::for_draft(&draft) {
                    println!(
                        "{} day(s), {} working day(s)",
                        summary.total_days, summary.working_days
                    );
                }
                0
            } else {
                eprintln!("Found {} error(s)", validation.errors.len());
                for (field, message) in &validation.errors {
                    println!("{field}: {message}");
                }
                // Code 2 = demande refusée par les règles
                2
            }
        }
        Commands::Days {
            start,
            end,
            half_day,
        } => {
            if end < start {
                bail!("end date must not be before start date");
            }
            println!("total: {}", leave::total_days(start, end, half_day));
            println!("working: {}", leave::working_days(start, end, half_day));
            0
        }
        Commands::Shift {
            name,
            start,
            end,
            break_minutes,
            grace_minutes,
            check_in,
            check_out,
        } => {
            let def = ShiftDefinition {
                name,
                start_time: start,
                end_time: end,
                break_duration_minutes: break_minutes,
                grace_period_minutes: grace_minutes,
            };
            def.validate()?;
            println!("duration: {}", def.scheduled());
            println!("net: {} min", def.net_minutes());
            if let Some(at) = check_in {
                match def.punctuality(at) {
                    Punctuality::OnTime => println!("punctuality: on time"),
                    Punctuality::Late { minutes } => {
                        println!("punctuality: late by {minutes} min")
                    }
                }
                if let Some(out) = check_out {
                    println!("overtime: {} min", def.overtime_minutes(at, out));
                }
            }
            0
        }
        Commands::Notifications {
            input,
            mark_read,
            remove,
            mark_all_read,
            clear,
            out_json,
        } => {
            let mut store = NotificationStore::new(JsonFileFeed::open(&input));
            store.refresh();
            if let Some(err) = &store.state().error {
                bail!("loading notifications from {input}: {err}");
            }
            for id in mark_read {
                store.dispatch(NotificationAction::MarkRead(NotificationId::new(id)));
            }
            for id in remove {
                store.dispatch(NotificationAction::Remove(NotificationId::new(id)));
            }
            if mark_all_read {
                store.dispatch(NotificationAction::MarkAllRead);
            }
            if clear {
                store.dispatch(NotificationAction::Clear);
            }
            let state = store.into_state();
            if let Some(path) = out_json {
                io::export_notifications_json(path, &state)?;
            }
            println!("unread: {}", state.unread_count);
            for n in &state.items {
                println!(
                    "[{}] {} | {} | {}",
                    if n.read { "x" } else { " " },
                    n.id,
                    n.created_at.to_rfc3339(),
                    n.title
                );
            }
            0
        }
    };

    std::process::exit(code);
}
