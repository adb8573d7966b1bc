use axum::response::Html;

/// GET /ui
///
/// Development-only form. Posts to `/api/analyze` and shows the `result` text.
pub async fn ui_handler() -> Html<&'static str> {
    Html(UI_PAGE)
}

const UI_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume Analyzer</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 1rem; font-weight: 600; }
  fieldset { margin-top: 1rem; border: 1px solid #ccc; }
  button { margin-top: 1.5rem; padding: 0.5rem 1.5rem; }
  pre { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; min-height: 6rem; }
</style>
</head>
<body>
<h1>Resume Analyzer</h1>
<form id="analyze-form">
  <label for="file">Upload Resume</label>
  <input id="file" name="file" type="file" accept=".pdf,.docx">

  <label for="target_company">Target Company</label>
  <input id="target_company" name="target_company" type="text">

  <fieldset>
    <legend>Interview Type</legend>
    <label><input type="radio" name="interview_type" value="Technical" checked> Technical</label>
    <label><input type="radio" name="interview_type" value="Behavioral"> Behavioral</label>
    <label><input type="radio" name="interview_type" value="Mixed"> Mixed</label>
  </fieldset>

  <button type="submit">Analyze</button>
</form>
<h2>Result</h2>
<pre id="result"></pre>
<script>
  const form = document.getElementById("analyze-form");
  const output = document.getElementById("result");
  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    output.textContent = "Analyzing...";
    try {
      const response = await fetch("/api/analyze", { method: "POST", body: new FormData(form) });
      const body = await response.json();
      output.textContent = response.ok
        ? body.result
        : "Error: " + ((body.error && body.error.message) || response.statusText);
    } catch (err) {
      output.textContent = "Error: " + err;
    }
  });
</script>
</body>
</html>
"#;
