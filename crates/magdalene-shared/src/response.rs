//! Fixed response bodies returned by the form endpoints.

/// Where a successful login or registration sends the browser.
pub const LOGIN_REDIRECT: &str = "/buynow.html";

/// Plain-text body for a rejected login (served with HTTP 200).
pub const LOGIN_FAILED: &str =
    "Login failed. Please check your credentials or register for an account.";

/// Generic body for every validation or storage failure.
pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// Inline script answering a successful `POST /buynow`.
pub const PURCHASE_SUCCESS: &str = concat!(
    r#"<script>alert("Your data has been successfully submitted for further processing. "#,
    r#"🎉 Your order has been successfully placed! 🚗Thank you!"); "#,
    r#"window.location.href="/";</script>"#
);

/// Inline script answering a successful `POST /booking`.
pub const BOOKING_SUCCESS: &str = concat!(
    r#"<script>alert("🎉 Your booking has been successfully submitted! "#,
    r#"We will get in touch with you soon. 🚗"); "#,
    r#"window.location.href="/";</script>"#
);

/// Full page answering a successful `POST /getaquote`; returns home after 5s.
pub const QUOTE_SUCCESS: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Quote Request Received</title>
    <style>
        body {
            display: flex;
            align-items: center;
            justify-content: center;
            height: 100vh;
            margin: 0;
            background-color: #27ae60;
            color: white;
            font-family: Arial, sans-serif;
            text-align: center;
        }
        h1 {
            font-size: 2em;
        }
    </style>
</head>
<body>
    <div>
        <h1>🎉 Your quote request has been received! 🚀</h1>
    </div>
    <script>
        setTimeout(() => {
            window.location.href = "/";
        }, 5000);
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_scripts_return_home() {
        for body in [PURCHASE_SUCCESS, BOOKING_SUCCESS] {
            assert!(body.starts_with("<script>alert("));
            assert!(body.ends_with(r#"window.location.href="/";</script>"#));
        }
    }

    #[test]
    fn test_quote_page_redirects_after_five_seconds() {
        assert!(QUOTE_SUCCESS.contains("<title>Quote Request Received</title>"));
        assert!(QUOTE_SUCCESS.contains("}, 5000);"));
    }
}
