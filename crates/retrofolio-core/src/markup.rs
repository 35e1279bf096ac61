//! Markup and stylesheets the controller injects at runtime.

/// Keyframes and active-link styles shared by several effects.
pub const KEYFRAMES_CSS: &str = "\
@keyframes gradient {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}
@keyframes bounce {
  from { transform: translate(-50%, -50%) scale(1); }
  to { transform: translate(-50%, -50%) scale(1.05); }
}
@keyframes pulse {
  0%, 100% { transform: scale(1); opacity: 1; }
  50% { transform: scale(1.1); opacity: 0.8; }
}
.nav-link.active { color: var(--primary-blue) !important; }
.nav-link.active::after { width: 100% !important; }
";

/// Hue rotation applied to the whole page while the easter egg runs.
pub const RAINBOW_CSS: &str = "\
@keyframes rainbow {
  0% { filter: hue-rotate(0deg); }
  100% { filter: hue-rotate(360deg); }
}
body * { animation: rainbow 2s linear infinite !important; }
";

pub const LOADING_SCREEN_CLASS: &str = "loading-screen";

pub const LOADING_SCREEN_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; \
height: 100%; background: linear-gradient(135deg, var(--primary-blue), var(--secondary-blue)); \
display: flex; align-items: center; justify-content: center; z-index: 10000; \
transition: opacity 0.5s ease;";

pub const LOADING_CONTENT_STYLE: &str = "text-align: center; color: white;";

pub const LOADING_TITLE_TEXT: &str = "Wait \u{aa5c} \u{1bc5} \u{aa5c}";

pub const LOADING_TITLE_STYLE: &str = "font-size: 4rem; font-weight: 900; margin-bottom: 30px; \
animation: pulse 1.5s ease-in-out infinite;";

pub const LOADING_BAR_STYLE: &str = "width: 200px; height: 4px; \
background: rgba(255, 255, 255, 0.3); border-radius: 2px; overflow: hidden; margin: 0 auto;";

pub const LOADING_PROGRESS_STYLE: &str = "width: 0%; height: 100%; background: white; \
border-radius: 2px; transition: width 0.1s ease;";

pub const SUCCESS_BANNER_CLASS: &str = "success-message";

pub const SUCCESS_BANNER_TEXT: &str =
    "\u{1f389} Thank you! Your message has been sent successfully!";

pub const SUCCESS_BANNER_STYLE: &str = "position: fixed; top: 100px; right: 20px; \
background: linear-gradient(135deg, var(--primary-blue), var(--accent-blue)); color: white; \
padding: 15px 25px; border-radius: 10px; box-shadow: 0 10px 30px var(--shadow); \
z-index: 10000; transform: translateX(100%); transition: transform 0.3s ease;";

pub const EASTER_EGG_CLASS: &str = "konami-message";

pub const EASTER_EGG_TEXT: &str =
    "\u{1f389} KONAMI CODE ACTIVATED! \u{1f308} Welcome to the rainbow dimension!";

pub const EASTER_EGG_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
transform: translate(-50%, -50%); \
background: linear-gradient(45deg, #ff6b6b, #4ecdc4, #45b7d1, #96ceb4, #ffeaa7); \
background-size: 400% 400%; color: white; padding: 20px 40px; border-radius: 15px; \
font-size: 1.2rem; font-weight: 600; z-index: 10001; \
animation: gradient 2s ease infinite, bounce 0.5s ease infinite alternate; \
box-shadow: 0 20px 40px rgba(0,0,0,0.3);";

pub const TRAIL_MARKER_CLASS: &str = "cursor-trail";

pub const SUBMIT_SENDING_HTML: &str = "<span>Sending...</span><div class=\"btn-glow\"></div>";

pub const SUBMIT_SENT_HTML: &str =
    "<span>Message Sent! \u{2705}</span><div class=\"btn-glow\"></div>";

/// Looping animation started on first sight of a lazy element, by class.
pub const LAZY_ANIMATIONS: [(&str, &str); 2] = [
    ("computer-mascot", "mascotFloat 4s ease-in-out infinite"),
    ("sparkle", "sparkle 2s ease-in-out infinite"),
];
