//! Mount a link into `#root` and print the resulting document.
//!
//! Run with `RUST_LOG=tagmount=trace` to see each attribute being applied.

use std::error::Error;

use tagmount::{mount, Dom, ElementDescriptor, NodeData};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let mut dom = Dom::new();
    let body = dom.insert(NodeData::new("body"));
    dom.insert_child(body, NodeData::new("div").with_id("root"))?;

    let Some(container) = dom.query_selector("#root")? else {
        tracing::error!("no #root container in the document");
        return Ok(());
    };

    let link = ElementDescriptor::new("a")
        .attr("href", "https://github.com/sanjeetbth7")
        .attr("target", "_blank")
        .text("Click here to go on my github");
    mount(&mut dom, &link, container)?;

    println!("{}", dom.outer_html(body));
    Ok(())
}
