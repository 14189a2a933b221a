//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use annoconv::schema::{DoccanoOptions, RasaOptions};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "annoconv", about = "annotation export conversion tool.")]
/// Holds every command that is callable by the `annoconv` command.
pub enum Annoconv {
    #[structopt(about = "Build pre-annotation documents from text files")]
    TxtToJson(TxtToJson),
    #[structopt(about = "Convert annotation documents to entity/relation CSV tables")]
    JsonToCsv(JsonToCsv),
    #[structopt(about = "Convert annotation documents to training documents")]
    JsonToTrain(JsonToTrain),
    #[structopt(about = "Convert JSON-Lines exports to deduplicated entity/relation CSV tables")]
    JsonlToCsv(JsonlToCsv),
}

#[derive(Debug, StructOpt)]
/// txt-to-json command and parameters.
///
/// ```sh
/// USAGE:
///     annoconv txt-to-json <src> <dst>
///
/// ARGS:
///     <src>    source folder (contains *.txt)
///     <dst>    destination folder
/// ```
pub struct TxtToJson {
    #[structopt(parse(from_os_str), help = "source folder (contains *.txt)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct JsonToCsv {
    #[structopt(parse(from_os_str), help = "source folder (contains *.json)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        long = "feature-marker",
        help = "tag value of feature spans",
        default_value = "特性"
    )]
    pub feature_marker: String,
    #[structopt(
        long = "legacy-pivot",
        help = "drop the last row of the entity table, like older versions did"
    )]
    pub legacy_pivot: bool,
}

#[derive(Debug, StructOpt)]
pub struct JsonToTrain {
    #[structopt(parse(from_os_str), help = "source folder (contains *.json)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        long = "feature-marker",
        help = "tag value of feature spans",
        default_value = "特性"
    )]
    pub feature_marker: String,
}

#[derive(Debug, StructOpt)]
/// jsonl-to-csv command and parameters.
///
/// ```sh
/// USAGE:
///     annoconv jsonl-to-csv [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -n, --without-descriptions    do not attach description spans to entities and relations
///
/// OPTIONS:
///         --entity-description-label <entity-description-label>
///         --relation-description-label <relation-description-label>
/// ```
pub struct JsonlToCsv {
    #[structopt(parse(from_os_str), help = "source folder (contains *.jsonl)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        short = "n",
        long = "without-descriptions",
        help = "do not attach description spans to entities and relations"
    )]
    pub without_descriptions: bool,
    #[structopt(
        long = "entity-description-label",
        help = "label of entity description spans",
        default_value = "实体描述"
    )]
    pub entity_description_label: String,
    #[structopt(
        long = "relation-description-label",
        help = "label of relation description spans",
        default_value = "关系描述"
    )]
    pub relation_description_label: String,
}

impl From<&JsonToCsv> for RasaOptions {
    fn from(c: &JsonToCsv) -> Self {
        RasaOptions {
            feature_marker: c.feature_marker.clone(),
        }
    }
}

impl From<&JsonToTrain> for RasaOptions {
    fn from(c: &JsonToTrain) -> Self {
        RasaOptions {
            feature_marker: c.feature_marker.clone(),
        }
    }
}

impl From<&JsonlToCsv> for DoccanoOptions {
    fn from(c: &JsonlToCsv) -> Self {
        DoccanoOptions {
            with_descriptions: !c.without_descriptions,
            entity_description_label: c.entity_description_label.clone(),
            relation_description_label: c.relation_description_label.clone(),
        }
    }
}
