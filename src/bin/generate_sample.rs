use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reference idioms: the canonical list the filter keeps.
const REFERENCE_IDIOMS: [&str; 5] = ["一帆風順", "畫蛇添足", "守株待兔", "亡羊補牢", "井底之蛙"];

/// Explanation rows: (id, idiom, explanation). A few idioms fall outside
/// the reference list so a filter run has something to drop.
const EXPLANATIONS: [(&str, &str, &str); 8] = [
    ("1", "一帆風順", "就像坐船的時候，風一直往前吹，船跑得又快又穩。"),
    ("2", "入木三分", "就像用筆畫畫，畫得好用力，顏色都跑到木頭裡面了。"),
    ("3", "畫蛇添足", "蛇本來沒有腳，多畫了腳反而不像蛇了。"),
    ("4", "守株待兔", "兔子撞過一次樹，就一直等牠再撞一次，不去做別的事。"),
    ("5", "杯弓蛇影", "杯子裡的影子看起來像蛇，其實只是弓的影子。"),
    ("6", "亡羊補牢", "羊跑掉了才修籬笆，可是修好就不會再跑掉了。"),
    ("7", "井底之蛙", "青蛙住在井裡，以為天空只有井口那麼大。"),
    ("8", "對牛彈琴", "對著牛彈琴，牛聽不懂，還是低頭吃草。"),
];

/// Write a small reference list and explanations dataset under `data/` so
/// the filter binary can run end to end without the full shipped files.
fn main() -> Result<()> {
    let data_dir = Path::new("data");
    fs::create_dir_all(data_dir).context("creating data directory")?;

    let reference_path = data_dir.join("idioms_1543.csv");
    let mut writer =
        csv::Writer::from_path(&reference_path).context("creating reference CSV")?;
    writer.write_record(["idiom"])?;
    for idiom in REFERENCE_IDIOMS {
        writer.write_record([idiom])?;
    }
    writer.flush()?;

    let dataset_path = data_dir.join("idioms_with_3yo_explanations.csv");
    let mut writer = csv::Writer::from_path(&dataset_path).context("creating dataset CSV")?;
    writer.write_record(["id", "成語", "解釋"])?;
    for (id, idiom, explanation) in EXPLANATIONS {
        writer.write_record([id, idiom, explanation])?;
    }
    writer.flush()?;

    println!(
        "Wrote {} reference idioms to {} and {} explanation rows to {}",
        REFERENCE_IDIOMS.len(),
        reference_path.display(),
        EXPLANATIONS.len(),
        dataset_path.display()
    );

    Ok(())
}
