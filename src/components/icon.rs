use crate::{components::Style, data::Category};
use phf::phf_map;
use yew::prelude::*;

static DEFAULT_ICON: &'static str = "icon-166_0";
static HEAD_PREFIX: &'static str = "head-";

static SKILL_ICONS: phf::Map<&'static str, &'static str> = phf_map! {
	"farming" => "icon-294_0",
	"mining" => "icon-274_0",
	"combat" => "icon-272_0",
	"foraging" => "icon-6_3",
	"fishing" => "icon-346_0",
	"enchanting" => "icon-116_0",
	"alchemy" => "icon-379_0",
	"carpentry" => "icon-58_0",
	"runecrafting" => "icon-378_0",
	"social" => "icon-397_0",
	"taming" => "icon-383_0",
	"catacombs" => "head-964e1c3e315c8d8fffc37985b6681c5bd16a6f97ffd07199e8a05efbef103793",
	"healer" => "icon-373_0",
	"mage" => "icon-369_0",
	"berserk" => "icon-276_0",
	"archer" => "icon-261_0",
	"tank" => "icon-299_0",
};

/// The image shown next to a skill's name.
#[derive(Clone, PartialEq, Debug)]
pub enum Icon {
	/// A class from the item sprite sheet.
	Sprite(AttrValue),
	/// A player head, rendered from its texture hash.
	Head(AttrValue),
}

impl Default for Icon {
	fn default() -> Self {
		Self::Sprite(DEFAULT_ICON.into())
	}
}

impl From<&str> for Icon {
	fn from(key: &str) -> Self {
		match key.strip_prefix(HEAD_PREFIX) {
			Some(hash) => Self::Head(AttrValue::from(hash.to_owned())),
			None => Self::Sprite(AttrValue::from(key.to_owned())),
		}
	}
}

impl Icon {
	/// The icon for a displayed entity, falling back to the default icon.
	pub fn for_entry(name: &str, category: Category) -> Self {
		match category {
			Category::SkyblockLevel => Self::default(),
			Category::Skill | Category::Dungeon | Category::DungeonClass => match SKILL_ICONS.get(name) {
				Some(key) => Self::from(*key),
				None => Self::default(),
			},
		}
	}

	pub fn to_html(&self) -> Html {
		match self {
			Self::Sprite(class) => html!(<div class={classes!("item-icon", class.to_string())} />),
			Self::Head(hash) => {
				let style = Style::from([("background-image", format!("url(/head/{hash})"))]);
				html!(<div class="item-icon custom-icon" {style} />)
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn parse_sprite() {
		assert_eq!(Icon::from("icon-294_0"), Icon::Sprite("icon-294_0".into()));
	}

	#[test]
	fn parse_head() {
		assert_eq!(Icon::from("head-abcdef"), Icon::Head("abcdef".into()));
	}

	#[test]
	fn entry_known() {
		assert_eq!(Icon::for_entry("farming", Category::Skill), Icon::Sprite("icon-294_0".into()));
		assert!(matches!(Icon::for_entry("catacombs", Category::Dungeon), Icon::Head(_)));
	}

	#[test]
	fn entry_fallback() {
		assert_eq!(Icon::for_entry("trapping", Category::Skill), Icon::default());
		assert_eq!(Icon::for_entry("farming", Category::SkyblockLevel), Icon::default());
	}
}
