use clap::Parser;
use waitlist::configuration::get_configuration;
use waitlist::guard::{FileAttemptStore, FormView, MessageTone, SubmissionGuard, SubmitOutcome};
use waitlist::telemetry::{get_subscriber, init_subscriber};

/// Command-line front-end for the waitlist signup guard.
#[derive(Parser, Debug)]
#[command(name = "waitlist-submit")]
#[command(about = "Join the waitlist from the command line")]
struct Args {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    /// Decoy field. Humans never set it; automated callers that do are
    /// dropped without feedback.
    #[arg(long, default_value = "", hide = true)]
    website: String,
}

struct ConsoleForm {
    name: String,
    email: String,
    honeypot: String,
}

impl FormView for ConsoleForm {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn email(&self) -> String {
        self.email.clone()
    }

    fn honeypot(&self) -> String {
        self.honeypot.clone()
    }

    fn set_message(&mut self, text: &str, tone: MessageTone) {
        match tone {
            MessageTone::Warning | MessageTone::Error => eprintln!("{text}"),
            MessageTone::Neutral | MessageTone::Success => println!("{text}"),
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("waitlist-submit".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let args = Args::parse();
    let config = get_configuration().expect("Failed to read configuration");

    let client = config.client.client();
    let limiter = config.client.rate_limit.limiter();
    let store = FileAttemptStore::new(config.client.history_path.clone());
    let mut guard = SubmissionGuard::new(client, limiter, store);

    let mut form = ConsoleForm {
        name: args.name,
        email: args.email,
        honeypot: args.website,
    };

    match guard.submit(&mut form).await {
        // A detected bot gets the same exit as a success.
        SubmitOutcome::Accepted | SubmitOutcome::BotDetected => Ok(()),
        SubmitOutcome::RateLimited | SubmitOutcome::InvalidInput | SubmitOutcome::Failed => {
            std::process::exit(1)
        }
    }
}
