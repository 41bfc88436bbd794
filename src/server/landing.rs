//! Landing page served at `/`.

use axum::response::Html;

const LANDING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Cookshelf</title>
  <style>
    body, h1, h2, h3 { margin: 0; padding: 0; border: 0; }
    body {
      background: #424242;
      color: #fff;
      margin: 1.25rem;
      font-size: 1.25rem;
    }
    h1, h2, h3 { color: #EF5350; }
    h1, h2 { text-align: center; }
    h3 { color: #fff; }
    .container { width: 50%; margin: 0 auto; font-family: 'Lora', serif; }
    .card { border: 1px solid #EF5350; padding: 1rem; margin: 1rem 0; }
    .card h3 { margin-top: 0; }
  </style>
</head>

<body>
  <div class="container">
    <header>
      <h1>Cookshelf</h1>
      <h2>Discover and Share Amazing Recipes and Books</h2>
    </header>

    <main>
      <div class="card">
        <h3>Recipes</h3>
        <p>Browse the shared cookbook at <code>/api/recipes</code>.</p>
      </div>

      <div class="card">
        <h3>Books</h3>
        <p>Manage your collection at <code>/api/books</code>.</p>
      </div>
    </main>
  </div>
</body>
</html>
"#;

/// GET /
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_HTML)
}
