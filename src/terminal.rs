/// 터미널 화면
/// 표준 입력 명령과 카운트다운 틱을 하나의 루프에서 번갈아 처리한다.
// region:    --- Imports
use crate::auction::display::Notice;
use crate::catalog::filter::StatusFilter;
use crate::config::Config;
use crate::handlers::{AuctionApp, UiEvent};
use crate::store::ItemStore;
use std::fmt::Write as _;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::info;

// endregion: --- Imports

const HELP: &str = "\
Commands:
  filter <all|active|closed|archived>   reload the item list
  select <index>                        show item details
  bid <your name>                       raise the price by one bid step
  show                                  print the current screen
  json                                  print the current screen as JSON
  history                               list bids for the selected item
  help                                  print this help
  quit                                  exit";

// region:    --- Commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(StatusFilter),
    Select(i64),
    Bid(String),
    Show,
    Json,
    History,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "filter" => rest
                .parse()
                .map(Command::Filter)
                .map_err(|_| format!("unknown filter: {rest:?}")),
            "select" => rest
                .parse()
                .map(Command::Select)
                .map_err(|_| format!("invalid index: {rest:?}")),
            "bid" => Ok(Command::Bid(rest.to_string())),
            "show" | "" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "history" => Ok(Command::History),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other:?} (try `help`)")),
        }
    }
}
// endregion: --- Commands

// region:    --- Terminal Loop
pub async fn run<S: ItemStore + ?Sized>(mut app: AuctionApp<S>, config: &Config) -> io::Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    let notices = app.handle(UiEvent::FilterChanged(config.default_filter)).await;
    let mut out = render_notices(&notices);
    out.push_str(&app.screen().render(&config.currency));
    write_block(&mut stdout, &out).await?;
    write_block(&mut stdout, HELP).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        let out = execute(&mut app, command, config).await;
                        write_block(&mut stdout, &out).await?;
                    }
                    Err(msg) => write_block(&mut stdout, &Notice::Warning(msg).to_string()).await?,
                }
            }
            _ = app.next_tick() => {
                let before = app.session().state();
                let notices = app.handle(UiEvent::Tick).await;
                if !notices.is_empty() || app.session().state() != before {
                    let mut out = render_notices(&notices);
                    out.push_str(&app.session().display().time_text());
                    write_block(&mut stdout, &out).await?;
                }
            }
        }
    }

    info!("{:<12} --> 종료", "Terminal");
    Ok(())
}

async fn execute<S: ItemStore + ?Sized>(
    app: &mut AuctionApp<S>,
    command: Command,
    config: &Config,
) -> String {
    let currency = config.currency.as_str();
    match command {
        Command::Filter(filter) => {
            let notices = app.handle(UiEvent::FilterChanged(filter)).await;
            render_notices(&notices) + &app.screen().render(currency)
        }
        Command::Select(index) => {
            let notices = app.handle(UiEvent::SelectionChanged(index)).await;
            render_notices(&notices) + &app.screen().render(currency)
        }
        Command::Bid(name) => {
            let notices = app.handle(UiEvent::BidClicked(name)).await;
            render_notices(&notices) + &app.session().display().price_text(currency)
        }
        Command::Show => app.screen().render(currency),
        Command::Json => serde_json::to_string_pretty(&app.screen())
            .unwrap_or_else(|e| Notice::Error(e.to_string()).to_string()),
        Command::History => match app.bid_history().await {
            Ok(bids) if bids.is_empty() => "No bids yet.".to_string(),
            Ok(bids) => {
                let mut out = String::new();
                for bid in bids {
                    let _ = writeln!(
                        out,
                        "{}  {:<24} {} {}",
                        bid.bid_time, bid.bidder_name, bid.bid_amount, currency
                    );
                }
                out.trim_end().to_string()
            }
            Err(e) => Notice::Error(e.to_string()).to_string(),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

fn render_notices(notices: &[Notice]) -> String {
    let mut out = String::new();
    for notice in notices {
        let _ = writeln!(out, "{notice}");
    }
    out
}

async fn write_block(stdout: &mut Stdout, text: &str) -> io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
// endregion: --- Terminal Loop

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::parse("filter Archived"),
            Ok(Command::Filter(StatusFilter::Archived))
        );
        assert_eq!(Command::parse("select -1"), Ok(Command::Select(-1)));
        assert_eq!(
            Command::parse("bid  Anna Nowak "),
            Ok(Command::Bid("Anna Nowak".to_string()))
        );
        assert_eq!(Command::parse("bid"), Ok(Command::Bid(String::new())));
        assert_eq!(Command::parse(""), Ok(Command::Show));
        assert!(Command::parse("select two").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
