//! The single-page form. Option lists come from the profile domains so the
//! page can only submit values the server accepts.

use crate::profile::{
    AgeBand, ClickCount, Disability, Gender, HighestEducation, ImdBand, PrevAttempts, Region,
    StudentProfile, StudiedCredits,
};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Student Performance Predictor</title>
    <style>
        body { font-family: Arial, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; }
        .container { background: #f5f5f5; padding: 25px; border-radius: 10px; }
        .form-group { margin: 15px 0; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        .inline label { display: inline; font-weight: normal; margin-right: 15px; }
        select, input[type=number] { width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 4px; }
        input[type=range] { width: 100%; }
        button { background: #007bff; color: white; padding: 12px 24px; border: none; border-radius: 4px; cursor: pointer; }
        button:hover { background: #0056b3; }
        .metric { font-size: 24px; margin: 0; color: #007bff; }
        .result { margin-top: 20px; padding: 20px; border-radius: 5px; display: none; }
        .pass { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
        .fail { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
        .info { background: #d1ecf1; color: #0c5460; border: 1px solid #bee5eb; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🎓 Student Performance Predictor</h1>
        <p>This tool predicts whether a student is likely to pass or fail based on their learning behaviour and background.</p>

        <form id="profile" onsubmit="return false;">
            <h3>📋 Enter Student Data</h3>
            <div class="form-group inline">
                <label>⚧ Gender</label>
                {{GENDER}}
            </div>
            <div class="form-group">
                <label for="age_band">📅 Age Band</label>
                <select id="age_band" name="age_band">{{AGE_BAND}}</select>
            </div>
            <div class="form-group inline">
                <label>♿ Disability</label>
                {{DISABILITY}}
            </div>
            <div class="form-group">
                <label for="region">📍 Region</label>
                <select id="region" name="region">{{REGION}}</select>
            </div>
            <div class="form-group">
                <label for="highest_education">🎓 Highest Education Level</label>
                <select id="highest_education" name="highest_education">{{EDUCATION}}</select>
            </div>
            <div class="form-group">
                <label for="studied_credits">📚 Studied Credits</label>
                <select id="studied_credits" name="studied_credits">{{CREDITS}}</select>
            </div>
            <div class="form-group">
                <label for="num_of_prev_attempts">🔁 Number of Previous Attempts</label>
                <input type="number" id="num_of_prev_attempts" name="num_of_prev_attempts" min="0" max="{{ATTEMPTS_MAX}}" value="{{ATTEMPTS}}">
            </div>
            <div class="form-group">
                <label for="sum_click">🖱️ Total Platform Clicks: <span id="sum_click_value">{{CLICKS}}</span></label>
                <input type="range" id="sum_click" name="sum_click" min="0" max="{{CLICKS_MAX}}" step="1" value="{{CLICKS}}">
            </div>
            <div class="form-group">
                <label for="imd_band">🏘️ IMD Band (1 = most deprived, 10 = least)</label>
                <select id="imd_band" name="imd_band">{{IMD}}</select>
            </div>
            <div id="advisory" class="result info"></div>
        </form>

        <h3>📊 Engagement Summary</h3>
        <p>Engagement Level</p>
        <p id="engagement" class="metric"></p>

        <button onclick="predict()">🔍 Predict Student Result</button>

        <div id="result" class="result"></div>
    </div>

    <script>
        const numericFields = ['studied_credits', 'num_of_prev_attempts', 'sum_click', 'imd_band'];

        function readProfile() {
            const form = new FormData(document.getElementById('profile'));
            const profile = {};
            for (const [key, value] of form.entries()) {
                profile[key] = numericFields.includes(key) ? parseInt(value, 10) : value;
            }
            return profile;
        }

        async function post(url, body) {
            const response = await fetch(url, {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify(body)
            });
            if (!response.ok) {
                throw new Error(await response.text());
            }
            return response.json();
        }

        async function refresh() {
            document.getElementById('sum_click_value').textContent = document.getElementById('sum_click').value;
            try {
                const data = await post('/api/preview', readProfile());
                document.getElementById('engagement').textContent = `${data.engagement_level} ${data.engagement_emoji}`;
                const advisory = document.getElementById('advisory');
                advisory.style.display = data.advisory ? 'block' : 'none';
                advisory.textContent = data.advisory || '';
            } catch (error) {
                document.getElementById('engagement').textContent = 'Error: ' + error.message;
            }
        }

        async function predict() {
            const resultDiv = document.getElementById('result');
            try {
                const data = await post('/api/predict', readProfile());
                resultDiv.className = 'result ' + (data.label === 1 ? 'pass' : data.label === 0 ? 'fail' : 'info');
                resultDiv.textContent = data.message;
            } catch (error) {
                resultDiv.className = 'result fail';
                resultDiv.textContent = 'Error: ' + error.message;
            }
            resultDiv.style.display = 'block';
        }

        document.getElementById('profile').addEventListener('input', refresh);
        refresh();
    </script>
</body>
</html>
"#;

fn select_options(options: impl IntoIterator<Item = (String, bool)>) -> String {
    options
        .into_iter()
        .map(|(value, selected)| {
            let flag = if selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, escape(&value), flag)
        })
        .collect()
}

fn radio_options(name: &str, options: impl IntoIterator<Item = (&'static str, bool)>) -> String {
    options
        .into_iter()
        .map(|(value, checked)| {
            let flag = if checked { " checked" } else { "" };
            format!(
                r#"<label><input type="radio" name="{name}" value="{0}"{1}> {0}</label>"#,
                escape(value),
                flag
            )
        })
        .collect()
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the form with every control preset to its default.
pub fn render() -> String {
    let defaults = StudentProfile::default();

    TEMPLATE
        .replace(
            "{{GENDER}}",
            &radio_options("gender", Gender::ALL.map(|g| (g.label(), g == defaults.gender))),
        )
        .replace(
            "{{AGE_BAND}}",
            &select_options(AgeBand::ALL.map(|a| (a.label().to_string(), a == defaults.age_band))),
        )
        .replace(
            "{{DISABILITY}}",
            &radio_options("disability", Disability::ALL.map(|d| (d.label(), d == defaults.disability))),
        )
        .replace(
            "{{REGION}}",
            &select_options(Region::ALL.map(|r| (r.label().to_string(), r == defaults.region))),
        )
        .replace(
            "{{EDUCATION}}",
            &select_options(
                HighestEducation::ALL.map(|e| (e.label().to_string(), e == defaults.highest_education)),
            ),
        )
        .replace(
            "{{CREDITS}}",
            &select_options(
                StudiedCredits::ALL.map(|c| (c.value().to_string(), c == defaults.studied_credits)),
            ),
        )
        .replace(
            "{{IMD}}",
            &select_options(
                (ImdBand::MIN..=ImdBand::MAX).map(|band| (band.to_string(), band == defaults.imd_band.get())),
            ),
        )
        .replace("{{ATTEMPTS_MAX}}", &PrevAttempts::MAX.to_string())
        .replace("{{ATTEMPTS}}", &defaults.num_of_prev_attempts.get().to_string())
        .replace("{{CLICKS_MAX}}", &ClickCount::MAX.to_string())
        .replace("{{CLICKS}}", &defaults.sum_click.get().to_string())
}
