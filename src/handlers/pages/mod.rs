use axum::{extract::State, response::Html};
use axum_macros::debug_handler;

use crate::{config::AppState, error::Error};

/// Public landing page: the feed, most recently updated first.
#[debug_handler]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, Error> {
    let items = state.service.list().await?;

    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Site</title></head>\n<body>\n<h1>Site</h1>\n",
    );

    if items.is_empty() {
        page.push_str("<p>Nothing here yet.</p>\n");
    }

    for item in &items {
        page.push_str("<article>\n<h2>");
        page.push_str(&escape(&item.title));
        page.push_str("</h2>\n<p>");
        page.push_str(&escape(&item.content));
        page.push_str("</p>\n<small>");
        page.push_str(item.kind.as_str());
        page.push_str(" · ");
        page.push_str(&item.updated_at.format("%Y-%m-%d %H:%M").to_string());
        page.push_str("</small>\n</article>\n");
    }

    page.push_str("</body>\n</html>\n");

    Ok(Html(page))
}

/// Login page; public, the gate leaves it alone.
#[debug_handler]
pub async fn admin_login() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// Admin shell; only reachable through the auth gate.
#[debug_handler]
pub async fn admin() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Admin Login</title></head>
<body>
<h1>Admin Login</h1>
<form id="login-form">
  <input type="password" id="password" placeholder="Password" autofocus>
  <button type="submit">Log in</button>
</form>
<p id="status"></p>
<script>
document.getElementById('login-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const res = await fetch('/api/auth/login', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ password: document.getElementById('password').value }),
  });
  const body = await res.json();
  if (body.success) {
    window.location.href = '/admin';
  } else {
    document.getElementById('status').textContent = body.error;
  }
});
</script>
</body>
</html>
"#;

const ADMIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Admin</title></head>
<body>
<h1>Admin</h1>
<form id="create-form">
  <input id="title" placeholder="Title">
  <select id="type">
    <option value="note">note</option>
    <option value="update">update</option>
    <option value="link">link</option>
  </select>
  <br>
  <textarea id="content" placeholder="Content"></textarea>
  <br>
  <button type="submit">Create</button>
  <button type="button" id="logout">Log out</button>
</form>
<ul id="items"></ul>
<script>
async function refresh() {
  const res = await fetch('/api/content');
  const body = await res.json();
  const list = document.getElementById('items');
  list.textContent = '';
  for (const item of body.items) {
    const li = document.createElement('li');
    li.textContent = '[' + item.type + '] ' + item.title + ' ';
    const del = document.createElement('button');
    del.textContent = 'Delete';
    del.addEventListener('click', async () => {
      await fetch('/api/content/' + item.id, { method: 'DELETE' });
      refresh();
    });
    li.appendChild(del);
    list.appendChild(li);
  }
}
document.getElementById('create-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  await fetch('/api/content', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({
      title: document.getElementById('title').value,
      content: document.getElementById('content').value,
      type: document.getElementById('type').value,
    }),
  });
  refresh();
});
document.getElementById('logout').addEventListener('click', async () => {
  await fetch('/api/auth/logout', { method: 'POST' });
  window.location.href = '/admin/login';
});
refresh();
</script>
</body>
</html>
"#;
