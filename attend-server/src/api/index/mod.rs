//! 首页路由
//!
//! 提供一个极简的手动测试页面，方便在浏览器里给 `/events`
//! 发样例事件、查看 `/report` 和 `/health` 输出。

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Attend Server</title>
<style>
  body { font-family: monospace; margin: 2rem; max-width: 48rem; }
  input { width: 16rem; }
  pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }
</style>
</head>
<body>
<h1>Attend Server</h1>
<p>Manual test page. Sending events requires the agent token.</p>
<p>
  <label>Token: <input id="token" placeholder="agent token"></label>
  <button onclick="sendSample()">Send sample event</button>
</p>
<p><a href="/report">/report</a> &middot; <a href="/health">/health</a></p>
<pre id="out">(no request yet)</pre>
<script>
async function sendSample() {
  const res = await fetch('/events', {
    method: 'POST',
    headers: {
      'content-type': 'application/json',
      'x-agent-token': document.getElementById('token').value,
    },
    body: JSON.stringify({
      identifier: '101',
      timestamp: new Date().toISOString(),
      outcome: 'granted',
    }),
  });
  const body = await res.json();
  document.getElementById('out').textContent =
    res.status + '\n' + JSON.stringify(body, null, 2);
}
</script>
</body>
</html>
"#;

/// 首页路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

/// GET / - 手动测试页面
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
