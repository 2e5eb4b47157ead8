//! Command implementations

use std::path::Path;

use anyhow::{bail, Result};
use configs::DashboardConfig;
use migration::MigratorTrait;
use models::db::{connect_read_write, StoreConfig};
use models::fixtures::{self, SeedReport};
use serde_json::json;
use service::fleet::filters::ModelSelection;
use service::fleet::{FleetQueryService, FleetRepository, ReviewSummary};
use tracing::{info, instrument};

use crate::cli::{Command, OutputFormat, OverviewArgs};
use crate::render;

/// Presentation layer over the fleet query service: picks defaults for unset
/// selections and renders each result set as text or JSON.
pub struct Dashboard<R: FleetRepository> {
    svc: FleetQueryService<R>,
    settings: DashboardConfig,
    format: OutputFormat,
}

fn to_json(value: serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&value)? + "\n")
}

/// Number of different models picked; repeats count once.
fn distinct_models(models: &[String]) -> usize {
    ModelSelection::new(models).map(|s| s.len()).unwrap_or(0)
}

impl<R: FleetRepository> Dashboard<R> {
    pub fn new(svc: FleetQueryService<R>, settings: DashboardConfig, format: OutputFormat) -> Self {
        Self { svc, settings, format }
    }

    /// Run one read-only command and return its rendered output.
    pub async fn execute(&self, command: &Command) -> Result<String> {
        let json = self.format == OutputFormat::Json;
        match command {
            Command::Cities => {
                let cities = self.svc.list_cities().await?;
                if json { to_json(json!(cities)) } else { Ok(render::options("Cities", &cities)) }
            }
            Command::Types => {
                let types = self.svc.list_vehicle_types().await?;
                if json { to_json(json!(types)) } else { Ok(render::options("Vehicle Types", &types)) }
            }
            Command::Models => {
                let models = self.svc.list_models().await?;
                if json { to_json(json!(models)) } else { Ok(render::options("Models", &models)) }
            }
            Command::Oems { city } => {
                let oems = self.svc.find_oems_by_city(city).await?;
                if json { to_json(json!({ "city": city, "oems": oems })) } else { Ok(render::oems(city, &oems)) }
            }
            Command::Vehicles { vehicle_type, budget } => {
                let budget = self.settings.resolve_budget(*budget)?;
                let vehicles = self.svc.find_vehicles(vehicle_type, budget).await?;
                if json {
                    to_json(json!({ "type": vehicle_type, "budget_lakhs": budget, "vehicles": vehicles }))
                } else {
                    Ok(render::vehicles(vehicle_type, budget, &vehicles))
                }
            }
            Command::Reviews { model } => {
                let reviews = self.svc.get_reviews(model).await?;
                if json {
                    let summary = ReviewSummary::from_reviews(&reviews);
                    to_json(json!({ "model": model, "reviews": reviews, "summary": summary }))
                } else {
                    Ok(render::reviews(model, &reviews))
                }
            }
            Command::Compare { models } => self.compare(models).await,
            Command::Analytics => {
                let analytics = self.svc.fleet_analytics().await?;
                if json { to_json(json!(analytics)) } else { Ok(render::analytics(&analytics)) }
            }
            Command::Overview(args) => self.overview(args).await,
            Command::Seed { .. } => bail!("seed is not a dashboard query"),
        }
    }

    async fn compare(&self, models: &[String]) -> Result<String> {
        let min = self.settings.compare_min_models;
        let selected = distinct_models(models);
        // Below the minimum the section only shows a hint; the store is not read.
        let vehicles = if selected >= min { self.svc.compare_models(models).await? } else { Vec::new() };
        if self.format == OutputFormat::Json {
            let mut body = json!({ "models": models, "vehicles": vehicles });
            if selected < min {
                body["message"] = json!(render::compare_hint(min));
            }
            return to_json(body);
        }
        Ok(render::comparison(selected, min, &vehicles))
    }

    /// All sections, with unset selections defaulting to the first option.
    #[instrument(skip_all)]
    async fn overview(&self, args: &OverviewArgs) -> Result<String> {
        let budget = self.settings.resolve_budget(args.budget)?;
        let city = match &args.city {
            Some(c) => Some(c.clone()),
            None => self.svc.list_cities().await?.into_iter().next(),
        };
        let vehicle_type = match &args.vehicle_type {
            Some(t) => Some(t.clone()),
            None => self.svc.list_vehicle_types().await?.into_iter().next(),
        };
        let model = match &args.model {
            Some(m) => Some(m.clone()),
            None => self.svc.list_models().await?.into_iter().next(),
        };

        let oems = match &city { Some(c) => self.svc.find_oems_by_city(c).await?, None => Vec::new() };
        let vehicles = match &vehicle_type { Some(t) => self.svc.find_vehicles(t, budget).await?, None => Vec::new() };
        let reviews = match &model { Some(m) => self.svc.get_reviews(m).await?, None => Vec::new() };
        let min = self.settings.compare_min_models;
        let selected = distinct_models(&args.compare);
        let compared = if selected >= min { self.svc.compare_models(args.compare.as_slice()).await? } else { Vec::new() };
        let analytics = self.svc.fleet_analytics().await?;

        if self.format == OutputFormat::Json {
            return to_json(json!({
                "filters": {
                    "city": city,
                    "type": vehicle_type,
                    "budget_lakhs": budget,
                    "model": model,
                    "compare": args.compare,
                },
                "oems": oems,
                "vehicles": vehicles,
                "reviews": reviews,
                "review_summary": ReviewSummary::from_reviews(&reviews),
                "comparison": compared,
                "analytics": analytics,
            }));
        }

        let sections = [
            render::oems(city.as_deref().unwrap_or("(no city)"), &oems),
            render::vehicles(vehicle_type.as_deref().unwrap_or("(no type)"), budget, &vehicles),
            render::reviews(model.as_deref().unwrap_or("(no model)"), &reviews),
            render::comparison(selected, min, &compared),
            render::analytics(&analytics),
        ];
        Ok(sections.join("\n"))
    }
}

/// Create the demo store: migrate a new file and load the demo dataset.
pub async fn seed_store(store: &StoreConfig, force: bool) -> Result<SeedReport> {
    let path: &Path = store.path();
    if path.exists() {
        if !force {
            bail!("{} already exists; pass --force to replace it", path.display());
        }
        std::fs::remove_file(path)?;
        info!(path = %path.display(), "existing_store_removed");
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let db = connect_read_write(store).await?;
    migration::Migrator::up(&db, None).await?;
    let report = fixtures::seed_demo(&db).await?;
    db.close().await?;
    Ok(report)
}

pub fn render_seed(path: &Path, report: &SeedReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(json!({ "path": path.display().to_string(), "seeded": report }));
    }
    Ok(format!(
        "Seeded {}: {} OEMs, {} vehicles, {} reviews\n",
        path.display(),
        report.oems,
        report.vehicles,
        report.reviews
    ))
}
