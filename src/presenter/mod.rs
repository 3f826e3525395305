// Poller/presenter: issue category queries and render each result

pub mod format;

use std::future::Future;
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::task::JoinHandle;

use crate::error::{QueryError, QueryFailed};
use crate::gateway::{QueryGateway, query};
use crate::models::{
    BuildInfo, Category, CpuInfo, DisplayInfo, MemoryInfo, NetworkDetail, NetworkInfo,
    PropertyKind, StorageInfo,
};
use crate::surface::{PresentationSurface, Target};
use format::AddressResolution;

/// Category tasks spawned by one fetch. Dropping it detaches the tasks; they
/// still run to completion and write their targets.
pub struct PollCycle {
    tasks: Vec<JoinHandle<()>>,
}

impl PollCycle {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait until every category task has finished. Results are not
    /// collected; each task has already written its own targets.
    pub async fn settled(self) {
        for result in join_all(self.tasks).await {
            if let Err(e) = result {
                tracing::warn!(error = %e, "category task did not complete");
            }
        }
    }
}

/// Drives gateway queries and projects results onto the surface. Every
/// category is queried in its own task and fails on its own.
pub struct Presenter<G, S> {
    gateway: Arc<G>,
    surface: Arc<S>,
}

impl<G, S> Clone for Presenter<G, S> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            surface: self.surface.clone(),
        }
    }
}

impl<G: QueryGateway, S: PresentationSurface> Presenter<G, S> {
    pub fn new(gateway: Arc<G>, surface: Arc<S>) -> Self {
        Self { gateway, surface }
    }

    /// Query build and display info once. Not retried.
    pub fn fetch_static_info(&self) -> PollCycle {
        PollCycle {
            tasks: vec![
                self.spawn_category(present_build),
                self.spawn_category(present_display),
            ],
        }
    }

    /// One poll cycle over CPU, memory, network and storage.
    pub fn update_dynamic_data(&self) -> PollCycle {
        PollCycle {
            tasks: vec![
                self.spawn_category(present_cpu),
                self.spawn_category(present_memory),
                self.spawn_category(present_network),
                self.spawn_category(present_storage),
            ],
        }
    }

    fn spawn_category<F, Fut>(&self, present: F) -> JoinHandle<()>
    where
        F: FnOnce(Arc<G>, Arc<S>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(present(self.gateway.clone(), self.surface.clone()))
    }
}

fn report(category: Category, error: &QueryError) {
    let failure = QueryFailed::new(category, error);
    tracing::warn!(
        category = category.as_str(),
        error = %failure.message,
        operation = "get_property_value",
        "{}",
        failure
    );
}

async fn present_build<G: QueryGateway, S: PresentationSurface>(gateway: Arc<G>, surface: Arc<S>) {
    match query::<BuildInfo, _>(gateway.as_ref(), PropertyKind::Build).await {
        Ok(build) => {
            let view = format::build_view(&build);
            surface.set_text(Target::ModelName, &view.model);
            surface.set_text(Target::PlatformVersion, &view.platform);
        }
        Err(e) => {
            report(Category::Build, &e);
            surface.set_text(Target::ModelName, format::BUILD_ERROR);
        }
    }
}

async fn present_display<G: QueryGateway, S: PresentationSurface>(
    gateway: Arc<G>,
    surface: Arc<S>,
) {
    match query::<DisplayInfo, _>(gateway.as_ref(), PropertyKind::Display).await {
        Ok(display) => surface.set_text(Target::DisplayResolution, &format::display_view(&display)),
        Err(e) => {
            report(Category::Display, &e);
            surface.set_text(Target::DisplayResolution, format::DISPLAY_ERROR);
        }
    }
}

async fn present_cpu<G: QueryGateway, S: PresentationSurface>(gateway: Arc<G>, surface: Arc<S>) {
    match query::<CpuInfo, _>(gateway.as_ref(), PropertyKind::Cpu).await {
        Ok(cpu) => {
            let view = format::cpu_view(&cpu);
            surface.set_text(Target::CpuLoad, &view.text);
            surface.set_width(Target::CpuFill, &view.fill);
        }
        Err(e) => {
            report(Category::Cpu, &e);
            surface.set_text(Target::CpuLoad, format::CPU_ERROR);
            surface.set_width(Target::CpuFill, format::EMPTY_FILL);
        }
    }
}

async fn present_memory<G: QueryGateway, S: PresentationSurface>(
    gateway: Arc<G>,
    surface: Arc<S>,
) {
    match query::<MemoryInfo, _>(gateway.as_ref(), PropertyKind::Memory).await {
        Ok(memory) => {
            let view = format::memory_view(&memory);
            surface.set_text(Target::MemoryTotal, &view.total_text);
            surface.set_text(Target::MemoryAvailable, &view.available_text);
        }
        Err(e) => {
            report(Category::Memory, &e);
            surface.set_text(Target::MemoryTotal, format::MEMORY_ERROR);
            surface.set_text(Target::MemoryAvailable, "");
        }
    }
}

async fn present_network<G: QueryGateway, S: PresentationSurface>(
    gateway: Arc<G>,
    surface: Arc<S>,
) {
    let network = match query::<NetworkInfo, _>(gateway.as_ref(), PropertyKind::Network).await {
        Ok(network) => network,
        Err(e) => {
            report(Category::Network, &e);
            surface.set_text(Target::NetworkStatus, format::NETWORK_ERROR);
            // Raw message here, unlike every other failure path.
            surface.set_text(Target::IpAddress, &e.message);
            return;
        }
    };

    surface.set_text(Target::NetworkStatus, &format::network_status_text(&network));
    match format::resolve_address(&network) {
        AddressResolution::Known(ip) => surface.set_text(Target::IpAddress, &format::ip_text(&ip)),
        AddressResolution::Lookup(kind) => {
            match query::<NetworkDetail, _>(gateway.as_ref(), kind).await {
                Ok(detail) => {
                    surface.set_text(Target::IpAddress, &format::detail_ip_text(&detail))
                }
                Err(e) => {
                    report(Category::Network, &e);
                    surface.set_text(Target::IpAddress, format::IP_API_ERROR);
                }
            }
        }
        AddressResolution::NotConnected => {
            surface.set_text(Target::IpAddress, format::NOT_CONNECTED)
        }
    }
}

async fn present_storage<G: QueryGateway, S: PresentationSurface>(
    gateway: Arc<G>,
    surface: Arc<S>,
) {
    match query::<StorageInfo, _>(gateway.as_ref(), PropertyKind::Storage).await {
        Ok(storage) => match storage.internal_unit() {
            Some(unit) => {
                let view = format::storage_view(unit);
                tracing::trace!(
                    total_gb = %view.total_gb,
                    available_gb = %view.available_gb,
                    "internal storage"
                );
                surface.set_text(Target::StorageAvailable, &view.available_text);
                surface.set_width(Target::StorageFill, &view.fill);
            }
            // Fill bar keeps its previous width.
            None => surface.set_text(Target::StorageAvailable, format::STORAGE_NOT_FOUND),
        },
        Err(e) => {
            report(Category::Storage, &e);
            surface.set_text(Target::StorageAvailable, format::STORAGE_ERROR);
            surface.set_width(Target::StorageFill, format::EMPTY_FILL);
        }
    }
}
