//! Renders a small dashboard page to stdout.
//!
//! The renderer's trace events go to stderr, the markup to stdout:
//!
//! ```sh
//! cargo run -p ztml --example page
//! ```

use ztml::prelude::*;

struct Service {
    name: &'static str,
    healthy: bool,
    latency_ms: f64,
}

fn status_row(service: &Service) -> html::HtmlTr {
    html::tr()
        .custom_data("service", service.name)
        .class("service")
        .if_class(!service.healthy, "service-down")
        .child(html::td().text(service.name))
        .child(html::td().text_f(format_args!("{:.1} ms", service.latency_ms)))
        .child(
            html::td().child(
                svg::svg()
                    .width("12")
                    .height("12")
                    .child(
                        svg::circle()
                            .cx("6")
                            .cy("6")
                            .r("5")
                            .fill(if service.healthy { "green" } else { "red" }),
                    ),
            ),
        )
        .child(
            html::td().child(
                html::button()
                    .z_req_f(format_args!("/services/{}/restart", service.name))
                    .z_req_method(ZReqMethod::Post)
                    .z_target("closest tr")
                    .z_swap("outer")
                    .disabled(service.healthy)
                    .text("Restart"),
            ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let services = [
        Service { name: "api", healthy: true, latency_ms: 12.25 },
        Service { name: "worker", healthy: false, latency_ms: 840.0 },
    ];

    let page = html::html()
        .lang("en")
        .child(
            html::head()
                .child(html::meta().charset("utf-8"))
                .child(html::title().text("Status")),
        )
        .child(
            html::body().child(
                html::table()
                    .class(["table", "status"])
                    .child(html::thead().child(
                        html::tr().children(["Service", "Latency", "", ""].map(|h| html::th().text(h))),
                    ))
                    .child(html::tbody().children(services.iter().map(status_row))),
            ),
        );

    let renderer = Renderer {
        pretty: true,
        doctype: true,
        ..Renderer::default()
    };

    let stdout = std::io::stdout();
    if let Err(err) = renderer.render_to_writer(&mut stdout.lock(), &page) {
        tracing::error!("failed to render page: {err}");
    }
}
