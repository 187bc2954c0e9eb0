//! Server-rendered HTML for the list, register and login pages.

use std::fmt::Write;

use super::response::Page;
use crate::domain::foundation::UserId;
use crate::domain::item::Item;

/// Render a page to a complete HTML document.
pub fn render(page: &Page) -> String {
    match page {
        Page::List {
            list_title,
            items,
            viewer,
        } => layout(list_title, &list_body(list_title, items, *viewer)),
        Page::Register => layout(
            "Register",
            &credentials_form("Register", "/register", "Already registered?", "/login", "Login"),
        ),
        Page::Login => layout(
            "Login",
            &credentials_form("Login", "/login", "New here?", "/register", "Register"),
        ),
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = html_escape(title),
        css = DEFAULT_CSS,
        body = body,
    )
}

fn list_body(list_title: &str, items: &[Item], viewer: Option<UserId>) -> String {
    let mut rows = String::new();
    for item in items {
        let id = item.id;
        let title = html_escape(&item.title);
        // Writing to a String cannot fail.
        let _ = write!(
            rows,
            r#"<div class="item">
  <form action="/delete" method="post">
    <input type="checkbox" name="deleteItemId" value="{id}" onchange="this.form.submit()">
  </form>
  <p id="title{id}">{title}</p>
  <form class="edit" action="/edit" method="post">
    <input type="hidden" name="updatedItemId" value="{id}">
    <input type="text" name="updatedItemTitle" value="{title}" autocomplete="off">
    <button type="submit">Save</button>
  </form>
</div>
"#
        );
    }

    let session_nav = match viewer {
        Some(_) => r#"<form action="/logout" method="post"><button type="submit">Logout</button></form>"#,
        None => r#"<a href="/login">Login</a> <a href="/register">Register</a>"#,
    };

    format!(
        r#"<nav>{session_nav}</nav>
<div class="box">
<h1>{heading}</h1>
{rows}<form class="item" action="/add" method="post">
  <input type="text" name="newItem" placeholder="New Item" autocomplete="off">
  <button type="submit">+</button>
</form>
</div>"#,
        heading = html_escape(list_title),
    )
}

fn credentials_form(
    heading: &str,
    action: &str,
    prompt: &str,
    other_href: &str,
    other_label: &str,
) -> String {
    format!(
        r#"<div class="box">
<h1>{heading}</h1>
<form action="{action}" method="post">
  <label>Username <input type="text" name="username" autocomplete="username"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">{heading}</button>
</form>
<p>{prompt} <a href="{other_href}">{other_label}</a></p>
</div>"#
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const DEFAULT_CSS: &str = r#"
body { font-family: sans-serif; background: #f4f4f8; color: #1f2937; }
.box { max-width: 480px; margin: 40px auto; background: #fff; padding: 16px; border-radius: 8px; }
.item { display: flex; align-items: center; gap: 8px; border-bottom: 1px solid #e5e7eb; padding: 8px 0; }
.item p { flex: 1; margin: 0; }
nav { text-align: right; padding: 8px; }
"#;
