//! Identifiers shipped with this build.

use super::IdCategory;

pub(super) const VERSION: &str = "alpha-20";

const ATTRIBUTES: &[i64] = &[210, 212, 213, 214];

const SKILLS: &[i64] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 13, 14, 16, 17, 22];

const TRAITS: &[i64] = &[
    191, 655, 656, 1033, 1034, 1035, 1036, 1037, 1038, 1039, 1040, 1041, 1042, 1043, 1044, 1045,
    1046, 1047, 1048, 1533, 1534, 1535, 1560, 1562, 2082, 2083,
];

const CONDITIONS: &[i64] = &[
    1525, 1526, 1530, 1531, 1532, 1540, 1541, 1542, 1543, 1544, 1545, 1546, 1547, 1548, 1550,
    1551, 1552, 1553, 1554, 1555, 1556, 1557, 1558, 2246, 2247, 2248, 2571,
];

const STORAGE_ITEMS: &[i64] = &[
    15, 16, 17, 157, 158, 169, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179, 706, 707, 712,
    725, 729, 760, 930, 1759, 1873, 1886, 1919, 1921, 1922, 1924, 1925, 1926, 1932, 1946, 1947,
    1948, 1949, 1950, 1951, 1952, 1953, 1954, 2053, 2058, 2475, 2657, 2715, 3069, 3070, 3071,
    3072, 3383, 3384, 3385, 3386, 3387, 3388, 3389, 3390,
];

const RESEARCH: &[i64] = &[
    2534, 2535, 2536, 2537, 2538, 2539, 2540, 2541, 2542, 2543, 2544, 2545, 2546, 2547, 2548,
    2549, 2550, 2551, 2552, 2553, 2554, 2555, 3104, 3105, 3106,
];

const CRAFTS: &[i64] = &[3, 4, 5, 6, 7, 8, 1114, 1115, 1116, 1117, 1118];

pub(super) const ENTRIES: &[(IdCategory, &[i64])] = &[
    (IdCategory::Attribute, ATTRIBUTES),
    (IdCategory::Skill, SKILLS),
    (IdCategory::Trait, TRAITS),
    (IdCategory::Condition, CONDITIONS),
    (IdCategory::StorageItem, STORAGE_ITEMS),
    (IdCategory::Research, RESEARCH),
    (IdCategory::Craft, CRAFTS),
];
