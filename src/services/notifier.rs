use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::EmailSettings;

pub const MAIL_BODY: &str = "Attached is the latest stock tracking ledger.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TlsMode {
    StartTls,
    Implicit,
}

/// Mail routes in priority order.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum RouteKind {
    SendGrid,
    Gmail,
    Outlook,
}

impl RouteKind {
    pub fn host(&self) -> &'static str {
        match self {
            RouteKind::SendGrid => "smtp.sendgrid.net",
            RouteKind::Gmail => "smtp.gmail.com",
            RouteKind::Outlook => "smtp.office365.com",
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            RouteKind::SendGrid | RouteKind::Outlook => 587,
            RouteKind::Gmail => 465,
        }
    }

    pub fn tls(&self) -> TlsMode {
        match self {
            RouteKind::SendGrid | RouteKind::Outlook => TlsMode::StartTls,
            RouteKind::Gmail => TlsMode::Implicit,
        }
    }
}

/// The credentials one route needs, each possibly missing.
#[derive(Clone, Debug, Getters)]
pub struct Route {
    kind: RouteKind,
    username: Option<String>,
    password: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl Route {
    pub fn for_kind(kind: RouteKind, email: &EmailSettings) -> Self {
        let to = email.email_to().clone();
        match kind {
            RouteKind::SendGrid => Self {
                kind,
                username: email.sg_api_key().as_ref().map(|_| String::from("apikey")),
                password: email.sg_api_key().clone(),
                from: email.email_from().clone(),
                to,
            },
            RouteKind::Gmail => Self {
                kind,
                username: email.email_user().clone(),
                password: email.email_pass().clone(),
                from: email.email_user().clone(),
                to,
            },
            RouteKind::Outlook => Self {
                kind,
                username: email.outlook_user().clone(),
                password: email.outlook_pass().clone(),
                from: email.outlook_user().clone(),
                to,
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        self.transport().is_some()
    }

    /// Resolves the route into a sendable transport when every value is set
    /// and `to` names at least one address.
    pub fn transport(&self) -> Option<Transport> {
        let transport = Transport {
            kind: self.kind,
            username: self.username.clone()?,
            password: self.password.clone()?,
            from: self.from.clone()?,
            to: self.to.clone()?,
        };
        let has_recipient = transport.recipients().next().is_some();
        has_recipient.then_some(transport)
    }
}

/// A fully configured route.
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Transport {
    kind: RouteKind,
    username: String,
    #[getter(skip)]
    password: String,
    from: String,
    to: String,
}

impl Transport {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn recipients(&self) -> impl Iterator<Item = &str> {
        self.to
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }
}

/// First fully configured route, if any.
pub fn select_route(email: &EmailSettings) -> Option<Transport> {
    RouteKind::iter()
        .map(|kind| Route::for_kind(kind, email))
        .find_map(|route| route.transport())
}

#[derive(Clone, Debug, Getters, new)]
pub struct LedgerMail {
    subject: String,
    body: String,
    attachment_name: String,
    attachment: Vec<u8>,
}

impl LedgerMail {
    pub async fn from_ledger(path: &Path, date: NaiveDate) -> Result<Self> {
        let attachment = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read ledger at {}", path.display()))?;
        let attachment_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("ledger.csv"));

        Ok(Self {
            subject: format!("Stock ledger {}", date.format("%Y-%m-%d")),
            body: MAIL_BODY.to_string(),
            attachment_name,
            attachment,
        })
    }
}

pub trait Mailer {
    fn send(&self, transport: &Transport, mail: &LedgerMail) -> impl Future<Output = Result<()>>;
}

#[derive(Clone, Debug, Default)]
pub struct SmtpMailer;

impl SmtpMailer {
    pub fn build_message(transport: &Transport, mail: &LedgerMail) -> Result<Message> {
        let from = transport
            .from()
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid sender address '{}'", transport.from()))?;

        let mut builder = Message::builder().from(from).subject(mail.subject());
        for recipient in transport.recipients() {
            let to = recipient
                .parse::<Mailbox>()
                .with_context(|| format!("Invalid recipient address '{}'", recipient))?;
            builder = builder.to(to);
        }

        let content_type = ContentType::parse("application/octet-stream")
            .context("Invalid attachment content type")?;

        builder
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(mail.body().clone()))
                    .singlepart(
                        Attachment::new(mail.attachment_name().clone())
                            .body(mail.attachment().clone(), content_type),
                    ),
            )
            .context("Failed to build ledger email")
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, transport: &Transport, mail: &LedgerMail) -> Result<()> {
        let message = Self::build_message(transport, mail)?;
        let kind = transport.kind();

        let relay = match kind.tls() {
            TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(kind.host()),
            TlsMode::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(kind.host()),
        }
        .with_context(|| format!("Failed to set up SMTP relay {}", kind.host()))?;

        let smtp = relay
            .port(kind.port())
            .credentials(Credentials::new(
                transport.username().clone(),
                transport.password().to_string(),
            ))
            .build();

        smtp.send(message)
            .await
            .with_context(|| format!("{} ({}:{})", kind, kind.host(), kind.port()))?;

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Delivery {
    Sent(RouteKind),
    NotConfigured,
}

/// Mails the ledger through the first configured route. Send failures are
/// returned to the caller; an unconfigured setup is not an error.
pub async fn notify<M: Mailer>(
    mailer: &M,
    email: &EmailSettings,
    ledger_path: &Path,
    date: NaiveDate,
) -> Result<Delivery> {
    let Some(transport) = select_route(email) else {
        tracing::info!("no email route configured, skipping notification");
        return Ok(Delivery::NotConfigured);
    };

    let mail = LedgerMail::from_ledger(ledger_path, date).await?;
    mailer.send(&transport, &mail).await?;

    tracing::info!(route = %transport.kind(), to = %transport.to(), "sent ledger email");
    Ok(Delivery::Sent(*transport.kind()))
}
