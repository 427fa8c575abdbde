use crossterm::style::{style, Color, Stylize};

use crate::catalog::{self, Resource, RESOURCES};
use crate::constants::{APP_NAME, APP_VERSION, USAGE};
use crate::messages::RenderEvent;
use crate::models::{DisplayMessage, MessageKind, Sender};

/// Render an event for an interactive terminal
///
/// Returns `None` for user entries unless `echo` is set, since the terminal
/// already shows what was typed.
pub fn render_event(event: &RenderEvent, echo: bool) -> Option<String> {
    match event {
        RenderEvent::Entry { entry, request_id } => {
            if entry.message.sender == Sender::User && !echo {
                return None;
            }
            let body = render_message(&entry.message);
            Some(match request_id {
                Some(id) => format!("{} {}", style(format!("[#{}]", id)).dark_grey(), body),
                None => body,
            })
        }
        RenderEvent::Pending {
            request_id,
            method,
            path,
        } => Some(format!(
            "{} Sending {} request to {}...",
            style(format!("[#{}]", request_id)).dark_grey(),
            style(method).with(method_color(method)).bold(),
            path
        )),
    }
}

/// Styled text for one message
pub fn render_message(message: &DisplayMessage) -> String {
    match (message.sender, message.kind) {
        (Sender::User, _) => format!("{} {}", "you>".dim(), message.text),
        (Sender::Bot, MessageKind::Text) => message.text.clone(),
        (Sender::Bot, MessageKind::Error) => style(&message.text).red().to_string(),
        (Sender::Bot, MessageKind::Code) => highlight_json(&message.text),
    }
}

/// Usage text plus the endpoint catalog
pub fn help_text() -> String {
    let mut out = format!("{} {}\n\nUsage: {}\n", APP_NAME, APP_VERSION, USAGE);
    out.push_str("Built-ins: help [resource], quit, exit\n\nKnown endpoints:\n");
    for resource in RESOURCES {
        push_resource(&mut out, resource);
    }
    out
}

/// Endpoints of one catalog resource
pub fn resource_help(name: &str) -> String {
    match catalog::lookup(name) {
        Some(resource) => {
            let mut out = String::new();
            push_resource(&mut out, resource);
            out
        }
        None => {
            let known: Vec<&str> = RESOURCES.iter().map(|r| r.name).collect();
            format!("Unknown resource: {}. Known: {}\n", name, known.join(", "))
        }
    }
}

/// Help for the `help` built-in, with or without a topic
pub fn help_for(topic: Option<&str>) -> String {
    match topic {
        Some(name) => resource_help(name),
        None => help_text(),
    }
}

fn push_resource(out: &mut String, resource: &Resource) {
    out.push_str(&format!("  {} - {}\n", resource.name, resource.description));
    for op in resource.operations() {
        out.push_str(&format!(
            "    {:<6} {}  ({})\n",
            op.method, op.path, op.description
        ));
    }
}

/// Simple JSON syntax highlighting
pub fn highlight_json(text: &str) -> String {
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut out = String::new();
        let mut current = String::new();
        let mut in_string = false;
        let mut escaped = false;

        for (i, c) in line.char_indices() {
            if in_string {
                current.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    // A key is a string followed by a colon
                    let is_key = line[i + 1..].starts_with(':');
                    let color = if is_key { Color::Cyan } else { Color::Green };
                    out.push_str(&style(&current).with(color).to_string());
                    current.clear();
                    in_string = false;
                }
                continue;
            }

            match c {
                '"' => {
                    flush_token(&mut out, &mut current);
                    in_string = true;
                    current.push(c);
                }
                ':' | ',' => {
                    flush_token(&mut out, &mut current);
                    out.push(c);
                }
                '{' | '}' | '[' | ']' => {
                    flush_token(&mut out, &mut current);
                    out.push_str(&style(c).yellow().to_string());
                }
                _ => current.push(c),
            }
        }

        flush_token(&mut out, &mut current);
        lines.push(out);
    }

    lines.join("\n")
}

/// Emit a pending bare token (number, literal or whitespace)
fn flush_token(out: &mut String, current: &mut String) {
    if current.is_empty() {
        return;
    }
    let token = current.trim();
    let styled = match token {
        "true" | "false" | "null" => Some(Color::Magenta),
        t if !t.is_empty() && t.parse::<f64>().is_ok() => Some(Color::Yellow),
        _ => None,
    };
    match styled {
        Some(color) => {
            let lead = &current[..current.len() - current.trim_start().len()];
            out.push_str(lead);
            out.push_str(&style(token).with(color).to_string());
            out.push_str(&current[lead.len() + token.len()..]);
        }
        None => out.push_str(current),
    }
    current.clear();
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}
