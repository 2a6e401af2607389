use clap::Parser;
use topic_quiz::{QuestionClient, Quiz, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Topic to generate questions for (repeat for multiple topics)
    #[arg(short, long = "topic", required = true)]
    topics: Vec<String>,

    /// Generation endpoint override
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("GEMINI_API_KEY must be set");
            std::process::exit(1);
        }
    };

    let client = QuestionClient::new(args.endpoint, api_key);
    println!("Fetching questions for {} topic(s)...", args.topics.len());
    let quiz = Quiz::fetch(&client, &args.topics).await;

    if quiz.is_empty() {
        eprintln!("Couldn't load questions for any topic");
        std::process::exit(1);
    }

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
