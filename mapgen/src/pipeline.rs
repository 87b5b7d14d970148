use std::{fs, path::PathBuf};

use log::info;
use mapgen_config::MappingsConfiguration;
use mapgen_core::{BedrockTable, ConversionTable, JavaTable};
use mapgen_registry::{
    extract, load_bedrock_table, BedrockError, JavaRegistry, Registry, RegistryError,
};
use thiserror::Error;

use crate::{
    emitter::{emit, EmitError},
    reconciler::{reconcile, TableKind},
};

pub const JAVA_ITEMS_FILE: &str = "java_items.json";
pub const JAVA_BLOCKS_FILE: &str = "java_blocks.json";
pub const ITEM_MAPPINGS_FILE: &str = "item_mappings.json";
pub const BLOCK_MAPPINGS_FILE: &str = "block_mappings.json";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Bedrock(#[from] BedrockError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error("Couldn't create output directory {path:?}: {source}")]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Every table of one run. Built once, handed to each stage.
#[derive(Debug, Default)]
pub struct PipelineContext {
    pub java_items: JavaTable,
    pub java_blocks: JavaTable,
    pub bedrock_items: BedrockTable,
    pub bedrock_blocks: BedrockTable,
}

impl PipelineContext {
    pub fn reconcile(&self, kind: TableKind) -> ConversionTable {
        match kind {
            TableKind::Items => reconcile(&self.java_items, &self.bedrock_items, kind),
            TableKind::Blocks => reconcile(&self.java_blocks, &self.bedrock_blocks, kind),
        }
    }
}

/// Counts of one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub java_items: usize,
    pub java_blocks: usize,
    /// Java entries with at least one conversion
    pub mapped_items: usize,
    pub mapped_blocks: usize,
    pub item_mappings: usize,
    pub block_mappings: usize,
}

pub struct Pipeline<'a> {
    config: &'a MappingsConfiguration,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a MappingsConfiguration) -> Self {
        Self { config }
    }

    /// Runs against the Java registries named in the config.
    pub fn run(&self) -> Result<Summary, PipelineError> {
        let items = Registry::load_items(&self.config.java.items)?;
        let blocks = Registry::load_blocks(&self.config.java.blocks)?;
        self.run_with(&items, &blocks)
    }

    /// Runs against the given Java registries.
    ///
    /// Both Bedrock tables are loaded before anything is written, so a missing table
    /// leaves the output directory untouched.
    pub fn run_with<I, B>(&self, items: &I, blocks: &B) -> Result<Summary, PipelineError>
    where
        I: JavaRegistry,
        B: JavaRegistry,
    {
        info!("Loading Bedrock items");
        let bedrock_items = load_bedrock_table(&self.config.bedrock.items)?;
        info!("Loading Bedrock blocks");
        let bedrock_blocks = load_bedrock_table(&self.config.bedrock.blocks)?;

        let output = &self.config.output.directory;
        fs::create_dir_all(output).map_err(|source| PipelineError::OutputDirectory {
            path: output.clone(),
            source,
        })?;

        info!("Loading Java items");
        let java_items = extract(items, &output.join(JAVA_ITEMS_FILE))?;
        info!("Loading Java blocks");
        let java_blocks = extract(blocks, &output.join(JAVA_BLOCKS_FILE))?;

        let context = PipelineContext {
            java_items,
            java_blocks,
            bedrock_items,
            bedrock_blocks,
        };

        let items_table = context.reconcile(TableKind::Items);
        let item_mappings = emit(&items_table, &output.join(ITEM_MAPPINGS_FILE))?;

        let blocks_table = context.reconcile(TableKind::Blocks);
        let block_mappings = emit(&blocks_table, &output.join(BLOCK_MAPPINGS_FILE))?;

        Ok(Summary {
            java_items: context.java_items.len(),
            java_blocks: context.java_blocks.len(),
            mapped_items: items_table.len(),
            mapped_blocks: blocks_table.len(),
            item_mappings,
            block_mappings,
        })
    }
}
