use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::adapters::console::print_report;
use crate::application::services::lookup_service::LookupService;
use crate::domain::{errors::AppError, ports::geolocation::GeoLocator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    MyIp,
    OtherIp,
    Exit,
    Unknown,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::MyIp,
            "2" => MenuChoice::OtherIp,
            "3" => MenuChoice::Exit,
            _ => MenuChoice::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowMyIp,
    /// Raw user input, passed on unvalidated.
    Lookup(String),
    Exit,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub async fn dispatch<R: GeoLocator, W: Write>(
    command: Command,
    service: &LookupService<R>,
    out: &mut W,
) -> Result<Flow, AppError> {
    match command {
        Command::ShowMyIp => match service.my_ip().await {
            Some(ip) => {
                writeln!(out, "\nYour IP address: {ip}")?;
                print_report(out, &service.report(&ip).await)?;
            }
            None => writeln!(out, "\nCould not determine your IP address")?,
        },
        Command::Lookup(ip) => print_report(out, &service.report(&ip).await)?,
        Command::Exit => {
            writeln!(out, "\nProgram finished.")?;
            return Ok(Flow::Exit);
        }
        Command::Invalid => writeln!(out, "\nInvalid choice. Try again.")?,
    }
    Ok(Flow::Continue)
}

fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n=== IP Geolocation ===")?;
    writeln!(out, "1. Show information about my IP")?;
    writeln!(out, "2. Enter another IP address")?;
    writeln!(out, "3. Exit")?;
    write!(out, "\nChoose an action (1-3): ")?;
    out.flush()
}

/// Menu loop. Stops on the exit option or when input runs out.
pub async fn run<R, I, W>(service: &LookupService<R>, input: I, out: &mut W) -> Result<(), AppError>
where
    R: GeoLocator,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        print_menu(out)?;
        let Some(choice) = lines.next_line().await? else {
            break;
        };

        let command = match MenuChoice::parse(&choice) {
            MenuChoice::MyIp => Command::ShowMyIp,
            MenuChoice::OtherIp => {
                write!(out, "\nEnter an IP address (e.g. 8.8.8.8): ")?;
                out.flush()?;
                match lines.next_line().await? {
                    Some(ip) => Command::Lookup(ip),
                    None => break,
                }
            }
            MenuChoice::Exit => Command::Exit,
            MenuChoice::Unknown => {
                tracing::debug!(%choice, "Unrecognised menu choice");
                Command::Invalid
            }
        };

        if dispatch(command, service, out).await? == Flow::Exit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::test_support::FakeLocator;

    fn service(my_ip: Option<&str>) -> LookupService<FakeLocator> {
        LookupService::new(FakeLocator::new(my_ip))
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::MyIp);
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::OtherIp);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Unknown);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Unknown);
    }

    #[tokio::test]
    async fn show_my_ip_prints_address_then_details() {
        let mut out = Vec::new();
        let flow = dispatch(Command::ShowMyIp, &service(Some("9.9.9.9")), &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert!(text.starts_with("\nYour IP address: 9.9.9.9\n"));
        assert!(text.contains("ip: 9.9.9.9"));
    }

    #[tokio::test]
    async fn show_my_ip_reports_resolution_failure() {
        let mut out = Vec::new();
        dispatch(Command::ShowMyIp, &service(None), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nCould not determine your IP address\n"
        );
    }

    #[tokio::test]
    async fn lookup_passes_raw_input_through() {
        let svc = service(None);
        let mut out = Vec::new();
        dispatch(Command::Lookup("not an ip".into()), &svc, &mut out)
            .await
            .unwrap();

        assert_eq!(svc_requests(&svc), vec!["not an ip"]);
        assert!(String::from_utf8(out).unwrap().contains("ip: not an ip"));
    }

    #[tokio::test]
    async fn exit_and_invalid_commands() {
        let mut out = Vec::new();
        let svc = service(None);

        assert_eq!(dispatch(Command::Invalid, &svc, &mut out).await.unwrap(), Flow::Continue);
        assert_eq!(dispatch(Command::Exit, &svc, &mut out).await.unwrap(), Flow::Exit);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nInvalid choice. Try again.\n\nProgram finished.\n"
        );
    }

    #[tokio::test]
    async fn run_loops_until_exit() {
        let svc = service(Some("9.9.9.9"));
        let input: &[u8] = b"7\n2\n1.1.1.1\n3\n1\n";
        let mut out = Vec::new();

        run(&svc, input, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("=== IP Geolocation ===").count(), 3);
        assert!(text.contains("Invalid choice. Try again."));
        assert!(text.contains("ip: 1.1.1.1"));
        assert!(text.ends_with("Program finished.\n"));
        assert_eq!(svc_requests(&svc), vec!["1.1.1.1"]);
    }

    #[tokio::test]
    async fn run_stops_at_end_of_input() {
        let svc = service(None);
        let mut out = Vec::new();

        run(&svc, &b"2\n"[..], &mut out).await.unwrap();

        assert!(svc_requests(&svc).is_empty());
    }

    fn svc_requests(svc: &LookupService<FakeLocator>) -> Vec<String> {
        svc.repo().requests()
    }
}
