// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! webview-bridge CLI
//!
//! Runs the interception pipeline against live URLs, the same way a web view
//! would for a top-level load.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use webview_bridge::{
    blocks_navigation, GateDecision, InterceptAction, InterceptorConfig, ResourceRequest,
    ResponseInterceptor,
};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("webview_bridge=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "fetch" => FetchArgs::parse(&args[2..]).and_then(|a| fetch_url(&a)),
        "check" => FetchArgs::parse(&args[2..]).and_then(|a| check_url(&a)),
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("webview-bridge {}", webview_bridge::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"webview-bridge - Response interception for embedded web views

USAGE:
    webview-bridge <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>     Intercept a load and write the resulting body to stdout
    check <url>     Show how the interceptor would treat a URL (accepts --config)
    help            Show this help message
    version         Show version information

FETCH OPTIONS:
    --script <js>     Script injected after the anchor
    --anchor <text>   Injection anchor (default: <head>)
    --config <file>   JSON interceptor configuration
    --subframe        Treat the load as a sub-resource request

EXAMPLES:
    webview-bridge fetch https://example.com --script "window.bridge = {{}}"
    webview-bridge check https://cdn.segment.com/analytics.js --config bridge.json
"#
    );
}

struct FetchArgs {
    url: String,
    script: Option<String>,
    anchor: Option<String>,
    config: Option<String>,
    subframe: bool,
}

impl FetchArgs {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut parsed = FetchArgs {
            url: String::new(),
            script: None,
            anchor: None,
            config: None,
            subframe: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--script" => parsed.script = Some(next_value(&mut iter, arg)?),
                "--anchor" => parsed.anchor = Some(next_value(&mut iter, arg)?),
                "--config" => parsed.config = Some(next_value(&mut iter, arg)?),
                "--subframe" => parsed.subframe = true,
                flag if flag.starts_with("--") => bail!("unknown option {}", flag),
                url => parsed.url = url.to_string(),
            }
        }

        if parsed.url.is_empty() {
            bail!("missing <url>; run `webview-bridge help` for usage");
        }
        Ok(parsed)
    }

    fn interceptor_config(&self) -> anyhow::Result<InterceptorConfig> {
        let mut config = match self.config {
            Some(ref path) => InterceptorConfig::from_file(path)?,
            None => InterceptorConfig::default(),
        };
        if let Some(ref anchor) = self.anchor {
            config = config.anchor(anchor.as_str());
        }
        Ok(config)
    }

    fn request(&self) -> ResourceRequest {
        let request = if self.subframe {
            ResourceRequest::sub_resource(self.url.as_str())
        } else {
            ResourceRequest::main_frame(self.url.as_str())
        };
        match self.script {
            Some(ref script) => request.with_script(script.as_str()),
            None => request,
        }
    }
}

fn next_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> anyhow::Result<String> {
    iter.next()
        .cloned()
        .with_context(|| format!("{} requires a value", flag))
}

fn fetch_url(args: &FetchArgs) -> anyhow::Result<()> {
    let interceptor = ResponseInterceptor::with_config(args.interceptor_config()?)
        .context("creating interceptor")?;
    let request = args.request();

    eprintln!("Intercepting: {}", request.url);

    match interceptor.intercept(&request) {
        InterceptAction::Continue => {
            eprintln!("Not intercepted: the view would load this itself");
        }
        InterceptAction::Blocked(_) => {
            eprintln!("Blocked: served empty placeholder");
        }
        InterceptAction::Respond(response) => {
            eprintln!(
                "Serving {} (charset {}, status {})",
                response.mime_type,
                response.charset,
                response
                    .status
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
            if let Some(mut body) = response.body {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                io::copy(&mut body, &mut out).context("streaming body")?;
                out.flush()?;
            }
        }
    }

    Ok(())
}

fn check_url(args: &FetchArgs) -> anyhow::Result<()> {
    let interceptor = ResponseInterceptor::with_config(args.interceptor_config()?)
        .context("creating interceptor")?;
    let config = interceptor.config();
    let url = args.url.as_str();

    println!("URL:              {}", url);
    println!("Navigation:       {}", if blocks_navigation(url) { "blocked" } else { "allowed" });

    if let Some(rule) = config.match_rule(url) {
        println!("Block rule:       {} ({:?})", rule.pattern, rule.action);
    }

    for (label, verdict) in verdicts(&interceptor, url) {
        println!("{:<17} {}", label, verdict);
    }

    Ok(())
}

/// Gate outcome for a URL loaded as main frame and as sub-resource
fn verdicts(interceptor: &ResponseInterceptor, url: &str) -> [(&'static str, &'static str); 2] {
    let verdict = |request: ResourceRequest| match interceptor.gate(&request) {
        GateDecision::Skip => "default handling",
        GateDecision::Placeholder => "empty placeholder",
        GateDecision::Fetch => "fetch and inspect",
    };
    [
        ("Main frame:", verdict(ResourceRequest::main_frame(url))),
        ("Sub-resource:", verdict(ResourceRequest::sub_resource(url))),
    ]
}
