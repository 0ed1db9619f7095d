//! `inventory`: list managed objects of one kind with a few summary properties.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;
use vim25_client::ObjectContent;

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{InventoryItem, OutputFormat, get_formatter};
use crate::progress::Spinner;

/// Kinds of inventory objects the CLI can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InventoryKind {
    Vm,
    Host,
    Datastore,
    Cluster,
    Datacenter,
    Network,
}

impl InventoryKind {
    pub fn managed_type(self) -> &'static str {
        match self {
            Self::Vm => "VirtualMachine",
            Self::Host => "HostSystem",
            Self::Datastore => "Datastore",
            Self::Cluster => "ClusterComputeResource",
            Self::Datacenter => "Datacenter",
            Self::Network => "Network",
        }
    }

    /// Property paths retrieved for each object, in table column order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Vm => &["name", "runtime.powerState"],
            Self::Host => &["name", "runtime.connectionState", "overallStatus"],
            Self::Datastore => &["name", "summary.capacity", "summary.freeSpace"],
            Self::Cluster => &["name", "overallStatus"],
            Self::Datacenter | Self::Network => &["name"],
        }
    }
}

fn to_item(object: ObjectContent) -> Result<InventoryItem> {
    let properties = object
        .prop_set
        .into_iter()
        .map(|p| -> Result<(String, serde_json::Value)> {
            Ok((p.name, serde_json::to_value(&p.val)?))
        })
        .collect::<Result<_>>()?;
    Ok(InventoryItem {
        reference: object.obj,
        properties,
    })
}

pub async fn run(
    config: vim25_config::Config,
    kind: InventoryKind,
    page_size: i32,
    quiet: bool,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    if page_size <= 0 {
        anyhow::bail!("--page-size must be greater than 0 (got {page_size})");
    }

    let mut client = crate::commands::build_client_from_config(&config)?;
    let managed_type = kind.managed_type();
    info!("Listing {} objects", managed_type);

    let spinner = Spinner::new(!quiet, format!("Listing {managed_type} objects..."));
    let objects = cancellable(
        cancel,
        client.inventory(managed_type, kind.paths(), Some(page_size)),
    )
    .await
    .with_context(|| format!("Failed to list {managed_type} objects"));
    crate::commands::finish(&mut client).await;
    drop(spinner);

    let mut items = objects?
        .into_iter()
        .map(to_item)
        .collect::<Result<Vec<_>>>()?;
    items.sort_by(|a, b| a.cell("name").cmp(&b.cell("name")));

    print!(
        "{}",
        get_formatter(output_format).format_inventory(&items, kind.paths())?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vim25_client::RetrieveResult;
    use vim25_client::soap::{decode_response, returnval};
    use vim25_client::testing::load_fixture;

    #[test]
    fn test_every_kind_asks_for_name_first() {
        for kind in InventoryKind::value_variants() {
            assert_eq!(kind.paths()[0], "name", "{kind:?}");
        }
    }

    #[test]
    fn test_managed_types() {
        assert_eq!(InventoryKind::Vm.managed_type(), "VirtualMachine");
        assert_eq!(
            InventoryKind::Cluster.managed_type(),
            "ClusterComputeResource"
        );
    }

    #[test]
    fn test_to_item_keeps_property_values() {
        let xml = load_fixture("property/vms_page2.xml");
        let response = decode_response(&xml).unwrap();
        let page: RetrieveResult = returnval(&response).unwrap();
        let item = to_item(page.objects[0].clone()).unwrap();

        assert_eq!(item.reference.r#type, "VirtualMachine");
        assert_eq!(item.reference.value, "vm-57");
        assert_eq!(item.cell("name"), "db-01");
    }
}
