mod webhook;

pub use webhook::{HttpWebhookSender, IWebhookSender, RecordingWebhookSender, SentWebhook};
