//! Region extractor
//!
//! Loads an image, labels its opaque regions and writes one PNG per
//! region into a directory named after the source file.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::{debug, info};

use crate::errors::{SplitError, SplitResult};
use crate::geometry::PixelPoint;
use crate::labeling::{AlphaMask, LabelMap};
use super::crop::crop_region;
use super::naming::RegionFileName;
use super::options::ExtractionOptions;
use super::region::Region;
use super::selection::{select_center, CenterSelection};

/// Labeled regions of one image together with the center choice
#[derive(Debug, Clone)]
pub struct ExtractionPlan {
    /// Component labels for every pixel
    pub labels: LabelMap,
    /// Regions in label order
    pub regions: Vec<Region>,
    /// Central and smallest-central regions
    pub selection: CenterSelection,
    /// Image center the selection was measured against
    pub image_center: PixelPoint,
}

impl ExtractionPlan {
    /// Region nearest to the image center
    pub fn central_region(&self) -> &Region {
        &self.regions[self.selection.central]
    }

    /// Region that carries the `_center` tag
    pub fn center_region(&self) -> &Region {
        &self.regions[self.selection.smallest]
    }

    /// Output file name for the region at `index`
    pub fn file_name(&self, index: usize) -> RegionFileName {
        let region = &self.regions[index];
        let offset = region.midpoint.offset_from(&self.selection.origin(&self.regions));
        let is_center = offset.is_zero() && index == self.selection.smallest;
        RegionFileName::new(region.label, offset, is_center)
    }

    /// Output file names in label order
    pub fn file_names(&self) -> Vec<RegionFileName> {
        (0..self.regions.len()).map(|i| self.file_name(i)).collect()
    }
}

/// Summary of one processed image
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Source image path
    pub source: PathBuf,
    /// Directory the crops were written to
    pub output_dir: PathBuf,
    /// Written files in label order
    pub files: Vec<PathBuf>,
    /// Label of the region tagged `_center`
    pub center_label: u32,
}

/// Splits images into per-region crops
#[derive(Debug, Clone, Default)]
pub struct RegionExtractor {
    options: ExtractionOptions,
}

impl RegionExtractor {
    /// Create a new extractor
    pub fn new(options: ExtractionOptions) -> Self {
        RegionExtractor { options }
    }

    /// Open an image and convert it to RGBA
    pub fn load(&self, path: &Path) -> SplitResult<RgbaImage> {
        let image = image::open(path).map_err(|e| SplitError::UnreadableImage {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(image.to_rgba8())
    }

    /// Label an image and choose its central region
    ///
    /// # Returns
    /// The plan, or `NoForegroundRegions` when the alpha channel is fully
    /// transparent
    pub fn plan(&self, image: &RgbaImage) -> SplitResult<ExtractionPlan> {
        let mask = AlphaMask::from_rgba(image);
        if mask.is_empty() {
            return Err(SplitError::NoForegroundRegions { path: None });
        }

        let labels = LabelMap::label(&mask, self.options.connectivity);
        let regions = Region::collect(&labels);
        let image_center = PixelPoint::image_center(image.width(), image.height());

        let selection = select_center(&regions, image_center)
            .ok_or(SplitError::NoForegroundRegions { path: None })?;

        debug!(
            "Found {} regions ({}), central region {} at ({}, {})",
            regions.len(),
            self.options.connectivity,
            regions[selection.central].label,
            regions[selection.central].midpoint.x,
            regions[selection.central].midpoint.y
        );

        Ok(ExtractionPlan {
            labels,
            regions,
            selection,
            image_center,
        })
    }

    /// Render every region of a plan as a masked crop, in label order
    pub fn render(&self, image: &RgbaImage, plan: &ExtractionPlan) -> Vec<(RegionFileName, RgbaImage)> {
        plan.regions
            .iter()
            .enumerate()
            .map(|(i, region)| {
                let crop = crop_region(image, &plan.labels, region, self.options.alpha_mode);
                (plan.file_name(i), crop)
            })
            .collect()
    }

    /// Split one image file into `<output_root>/<file stem>/region_*.png`
    ///
    /// The per-image directory is only created once at least one region
    /// has been found.
    pub fn extract_file(&self, source: &Path, output_root: &Path) -> SplitResult<ExtractionReport> {
        info!("Extracting regions from {}", source.display());

        let image = self.load(source)?;
        let plan = self.plan(&image).map_err(|e| match e {
            SplitError::NoForegroundRegions { .. } => SplitError::NoForegroundRegions {
                path: Some(source.to_path_buf()),
            },
            other => other,
        })?;

        let output_dir = output_dir_for(source, output_root)?;
        fs::create_dir_all(&output_dir).map_err(|e| SplitError::OutputPathError {
            path: output_dir.clone(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::with_capacity(plan.regions.len());
        for (name, crop) in self.render(&image, &plan) {
            let path = output_dir.join(name.to_string());
            crop.save_with_format(&path, ImageFormat::Png)
                .map_err(|e| SplitError::OutputPathError {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            debug!("Wrote {}", path.display());
            files.push(path);
        }

        info!("Wrote {} regions to {}", files.len(), output_dir.display());

        Ok(ExtractionReport {
            source: source.to_path_buf(),
            output_dir,
            files,
            center_label: plan.center_region().label,
        })
    }
}

/// Per-image output directory: the source's base name without extension
fn output_dir_for(source: &Path, output_root: &Path) -> SplitResult<PathBuf> {
    let stem = source.file_stem().ok_or_else(|| {
        SplitError::GenericError(format!("Input path has no file name: {}", source.display()))
    })?;
    Ok(output_root.join(stem))
}
