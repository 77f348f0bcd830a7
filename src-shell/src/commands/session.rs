//! Interactive browsing session
//!
//! Reads one command per line and answers each with a JSON `CommandResult`
//! line. This drives the chrome the same way the toolbar and tab strip do.

use serde::Serialize;
use std::io::{BufRead, Write};

use super::navigation::{self, NavigationInfo};
use super::tabs::{self, CloseInfo, SwitchInfo, TabInfo};
use super::{features, CommandResult};
use crate::state::AppState;
use vela_core::{Feature, FeatureOutcome, NavigationRequest, RequestKind, Shortcut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Open(String),
    /// A request raised by the page itself (link, sub-resource)
    Request(NavigationRequest),
    Back,
    Forward,
    Reload,
    Home,
    New(Option<String>),
    Close,
    Switch(usize),
    Tabs,
    Feature(Feature),
    Shortcut(String),
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// The text after `open ` is kept verbatim, like URL bar input; a bare
    /// `open` submits an empty URL bar.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let line = line.trim_start();
        let (verb, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw.trim();

        let command = match verb {
            "open" => SessionCommand::Open(raw.to_string()),
            "link" if !rest.is_empty() => SessionCommand::Request(NavigationRequest::new(
                rest,
                RequestKind::LinkClicked,
                true,
            )),
            "resource" if !rest.is_empty() => {
                SessionCommand::Request(NavigationRequest::sub_resource(rest))
            }
            "link" | "resource" => return Err(format!("usage: {} <url>", verb)),
            "back" => SessionCommand::Back,
            "forward" => SessionCommand::Forward,
            "reload" => SessionCommand::Reload,
            "home" => SessionCommand::Home,
            "new" if rest.is_empty() => SessionCommand::New(None),
            "new" => SessionCommand::New(Some(rest.to_string())),
            "close" => SessionCommand::Close,
            "switch" => {
                let index = rest
                    .parse()
                    .map_err(|_| format!("usage: switch <index>, got `{}`", rest))?;
                SessionCommand::Switch(index)
            }
            "tabs" => SessionCommand::Tabs,
            "bookmarks" | "reading" | "incognito" | "extensions" => {
                SessionCommand::Feature(verb.parse()?)
            }
            "shortcut" if !rest.is_empty() => SessionCommand::Shortcut(rest.to_string()),
            "shortcut" => return Err("usage: shortcut <keys>".to_string()),
            "quit" | "exit" => SessionCommand::Quit,
            other => return Err(format!("Unknown command: {}", other)),
        };

        Ok(Some(command))
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionReply {
    Navigation(NavigationInfo),
    Tabs { tabs: Vec<TabInfo> },
    Closed(CloseInfo),
    Switched(SwitchInfo),
    Feature { outcome: FeatureOutcome },
    Shortcut { shortcut: Option<Shortcut>, tabs: Vec<TabInfo> },
}

fn map<T>(
    result: CommandResult<T>,
    f: impl FnOnce(T) -> SessionReply,
) -> CommandResult<SessionReply> {
    match result.data {
        Some(data) => CommandResult::ok(f(data)),
        None => CommandResult::err(result.error.unwrap_or_default()),
    }
}

pub fn execute(state: &AppState, command: SessionCommand) -> CommandResult<SessionReply> {
    match command {
        SessionCommand::Open(text) => {
            map(navigation::navigate(state, &text), SessionReply::Navigation)
        }
        SessionCommand::Request(request) => {
            map(navigation::engine_request(state, &request), SessionReply::Navigation)
        }
        SessionCommand::Back => map(navigation::go_back(state), SessionReply::Navigation),
        SessionCommand::Forward => map(navigation::go_forward(state), SessionReply::Navigation),
        SessionCommand::Reload => map(navigation::reload(state), SessionReply::Navigation),
        SessionCommand::Home => map(navigation::go_home(state), SessionReply::Navigation),
        SessionCommand::New(url) => {
            map(tabs::new_tab(state, url), |tabs| SessionReply::Tabs { tabs })
        }
        SessionCommand::Close => map(tabs::close_current_tab(state), SessionReply::Closed),
        SessionCommand::Switch(index) => {
            map(tabs::switch_tab(state, index), SessionReply::Switched)
        }
        SessionCommand::Tabs => map(tabs::get_tabs(state), |tabs| SessionReply::Tabs { tabs }),
        SessionCommand::Feature(feature) => {
            map(features::trigger_feature(state, feature), |outcome| {
                SessionReply::Feature { outcome }
            })
        }
        SessionCommand::Shortcut(keys) => state
            .with_browser(|browser| {
                let shortcut = browser.handle_shortcut(&keys)?;
                Ok(SessionReply::Shortcut {
                    shortcut,
                    tabs: browser.with_tabs(TabInfo::collect),
                })
            })
            .into(),
        SessionCommand::Quit => CommandResult::err("Session already ending".to_string()),
    }
}

/// Run commands from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    state: &AppState,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;

        let result = match SessionCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                tracing::debug!(command = ?command, "Session command");
                execute(state, command)
            }
            Err(e) => CommandResult::err(e),
        };

        serde_json::to_writer(&mut output, &result)?;
        writeln!(output)?;
        output.flush()?;
    }

    tracing::info!("Browsing session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use std::io::Cursor;

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("  ").unwrap(), None);
        assert_eq!(
            SessionCommand::parse("open example.com").unwrap(),
            Some(SessionCommand::Open("example.com".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("open what is rust").unwrap(),
            Some(SessionCommand::Open("what is rust".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("open  rust ").unwrap(),
            Some(SessionCommand::Open(" rust ".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("open").unwrap(),
            Some(SessionCommand::Open(String::new()))
        );
        assert_eq!(
            SessionCommand::parse("link http://example.com/a").unwrap(),
            Some(SessionCommand::Request(NavigationRequest::new(
                "http://example.com/a",
                RequestKind::LinkClicked,
                true
            )))
        );
        assert_eq!(
            SessionCommand::parse("resource http://cdn.example/x.js").unwrap(),
            Some(SessionCommand::Request(NavigationRequest::sub_resource(
                "http://cdn.example/x.js"
            )))
        );
        assert_eq!(SessionCommand::parse("new").unwrap(), Some(SessionCommand::New(None)));
        assert_eq!(
            SessionCommand::parse("switch 2").unwrap(),
            Some(SessionCommand::Switch(2))
        );
        assert_eq!(
            SessionCommand::parse("reading").unwrap(),
            Some(SessionCommand::Feature(Feature::ReadingMode))
        );
        assert_eq!(
            SessionCommand::parse("shortcut Ctrl+T").unwrap(),
            Some(SessionCommand::Shortcut("Ctrl+T".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(SessionCommand::parse("link").is_err());
        assert!(SessionCommand::parse("resource  ").is_err());
        assert!(SessionCommand::parse("switch x").is_err());
        assert!(SessionCommand::parse("fly").is_err());
    }

    #[test]
    fn test_session_transcript() {
        let state = test_state();
        let input = Cursor::new("open example.com\n\nback\nshortcut Ctrl+T\nbogus\nquit\ntabs\n");
        let mut output = Vec::new();

        run(&state, input, &mut output).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        // Blank line skipped, nothing after quit
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["data"]["url_bar"], "http://example.com");
        assert_eq!(lines[1]["data"]["url_bar"], "http://www.google.com");
        assert_eq!(lines[2]["data"]["shortcut"], "new_tab");
        assert_eq!(lines[2]["data"]["tabs"].as_array().unwrap().len(), 2);
        assert_eq!(lines[3]["success"], false);
    }

    #[test]
    fn test_placeholder_features_do_not_navigate() {
        let state = test_state();

        let reply = execute(&state, SessionCommand::Feature(Feature::Incognito));
        assert!(reply.success);

        let tabs = tabs::get_tabs(&state).data.unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].url, "http://www.google.com");
    }

    #[test]
    fn test_empty_open_searches_template() {
        let state = test_state();
        let reply = execute(&state, SessionCommand::parse("open").unwrap().unwrap());
        assert!(reply.success);

        let tabs = tabs::get_tabs(&state).data.unwrap();
        assert_eq!(tabs[0].url, "https://www.google.com/search?q=");
    }

    #[test]
    fn test_link_and_resource_requests() {
        let state = test_state();
        let input = Cursor::new(
            "link https://example.com/docs\nresource https://ads.google.com/ad.js\ntabs\n",
        );
        let mut output = Vec::new();

        run(&state, input, &mut output).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines[0]["data"]["outcome"]["outcome"], "committed");
        assert_eq!(lines[0]["data"]["url_bar"], "https://example.com/docs");
        assert_eq!(lines[1]["data"]["outcome"]["outcome"], "blocked");
        assert_eq!(lines[1]["data"]["url_bar"], "https://example.com/docs");
        assert_eq!(lines[2]["data"]["tabs"][0]["label"], "https://example.com/docs");
    }
}
