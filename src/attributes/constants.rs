//! Graphviz attribute vocabulary.
//!
//! Well-known attribute keys and the enumerated values of the most frequently used
//! attributes. Every enum serializes to the exact spelling Graphviz expects through
//! [`AsRef<str>`], [`std::fmt::Display`] and [`std::str::FromStr`], and can be stored
//! directly in an attribute store via its [`From`] conversion into
//! [`AttributeValue`](super::AttributeValue).
//!
//! # Examples
//!
//! ```rust
//! use dotscribe::attributes::{Key, Shape};
//! use std::str::FromStr;
//!
//! assert_eq!(Key::ArrowHead.as_ref(), "arrowhead");
//! assert_eq!(Key::HeadUrl.to_string(), "headURL");
//! assert_eq!(Shape::from_str("Mrecord").unwrap(), Shape::MRecord);
//! ```

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use super::AttributeValue;

/// Attribute keys understood by Graphviz.
///
/// Keys are case sensitive; the handful that are not plain lowercase carry an explicit
/// serialization. Any `&str` is accepted wherever a key is expected, so attributes outside
/// this list can still be set.
#[allow(missing_docs)]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum Key {
    #[strum(serialize = "_background")]
    Background,
    Area,
    ArrowHead,
    ArrowSize,
    ArrowTail,
    Bb,
    BgColor,
    Center,
    Charset,
    Class,
    ClusterRank,
    Color,
    ColorScheme,
    Comment,
    Compound,
    Concentrate,
    Constraint,
    #[strum(serialize = "Damping")]
    Damping,
    Decorate,
    DefaultDist,
    Dim,
    Dimen,
    Dir,
    DirEdgeConstraints,
    Distortion,
    Dpi,
    EdgeHref,
    EdgeTarget,
    EdgeTooltip,
    #[strum(serialize = "edgeURL")]
    EdgeUrl,
    Epsilon,
    Esep,
    FillColor,
    FixedSize,
    FontColor,
    FontName,
    FontNames,
    FontPath,
    FontSize,
    ForceLabels,
    GradientAngle,
    Group,
    #[strum(serialize = "head_lp")]
    HeadLp,
    HeadClip,
    HeadHref,
    HeadLabel,
    HeadPort,
    HeadTarget,
    HeadTooltip,
    #[strum(serialize = "headURL")]
    HeadUrl,
    Height,
    Href,
    Id,
    Image,
    ImagePath,
    ImagePos,
    ImageScale,
    InputScale,
    #[strum(serialize = "K")]
    K,
    Label,
    #[strum(serialize = "label_scheme")]
    LabelScheme,
    LabelAngle,
    LabelDistance,
    LabelFloat,
    LabelFontColor,
    LabelFontName,
    LabelFontSize,
    LabelHref,
    LabelJust,
    LabelLoc,
    LabelTarget,
    LabelTooltip,
    #[strum(serialize = "labelURL")]
    LabelUrl,
    Landscape,
    Layer,
    LayerListSep,
    Layers,
    LayerSelect,
    LayerSep,
    Layout,
    Len,
    Levels,
    LevelsGap,
    LHead,
    LHeight,
    Lp,
    LTail,
    LWidth,
    Margin,
    MaxIter,
    McLimit,
    MinDist,
    MinLen,
    Mode,
    Model,
    Mosek,
    NewRank,
    NodeSep,
    NoJustify,
    Normalize,
    NoTranslate,
    NsLimit,
    NsLimit1,
    Ordering,
    Orientation,
    OutputOrder,
    Overlap,
    #[strum(serialize = "overlap_scaling")]
    OverlapScaling,
    #[strum(serialize = "overlap_shrink")]
    OverlapShrink,
    Pack,
    PackMode,
    Pad,
    Page,
    PageDir,
    PenColor,
    PenWidth,
    Peripheries,
    Pin,
    Pos,
    QuadTree,
    Quantum,
    Rank,
    RankDir,
    RankSep,
    Ratio,
    Rects,
    Regular,
    ReMinCross,
    RepulsiveForce,
    Resolution,
    Root,
    Rotate,
    Rotation,
    SameHead,
    SameTail,
    SamplePoints,
    Scale,
    SearchSize,
    Sep,
    Shape,
    ShapeFile,
    ShowBoxes,
    Sides,
    Size,
    Skew,
    Smoothing,
    Sortv,
    Splines,
    Start,
    Style,
    Stylesheet,
    #[strum(serialize = "tail_lp")]
    TailLp,
    TailClip,
    TailHref,
    TailLabel,
    TailPort,
    TailTarget,
    TailTooltip,
    #[strum(serialize = "tailURL")]
    TailUrl,
    Target,
    Tooltip,
    TrueColor,
    #[strum(serialize = "URL")]
    Url,
    Vertices,
    Viewport,
    #[strum(serialize = "voro_margin")]
    VoroMargin,
    Weight,
    Width,
    XdotVersion,
    XLabel,
    Xlp,
    Z,
}

/// Node shapes.
#[allow(missing_docs)]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Box,
    Polygon,
    Ellipse,
    Oval,
    Circle,
    Point,
    Egg,
    Triangle,
    PlainText,
    Plain,
    Diamond,
    Trapezium,
    Parallelogram,
    House,
    Pentagon,
    Hexagon,
    Septagon,
    Octagon,
    DoubleCircle,
    DoubleOctagon,
    TripleOctagon,
    InvTriangle,
    InvTrapezium,
    InvHouse,
    #[strum(serialize = "Mdiamond")]
    MDiamond,
    #[strum(serialize = "Msquare")]
    MSquare,
    #[strum(serialize = "Mcircle")]
    MCircle,
    Rect,
    Rectangle,
    Square,
    Star,
    None,
    Underline,
    Cylinder,
    Note,
    Tab,
    Folder,
    Box3d,
    Component,
    Promoter,
    Cds,
    Terminator,
    Utr,
    PrimerSite,
    RestrictionSite,
    FivePOverhang,
    ThreePOverhang,
    NOverhang,
    Assembly,
    Signature,
    Insulator,
    RiboSite,
    RnaStab,
    ProteaseSite,
    ProteinStab,
    RPromoter,
    RArrow,
    LArrow,
    LPromoter,
    Record,
    #[strum(serialize = "Mrecord")]
    MRecord,
}

/// Primitive arrow head and tail shapes.
///
/// Used as the value of [`Key::ArrowHead`] and [`Key::ArrowTail`]. Graphviz allows
/// combining primitives and modifiers (`"lteeoldiamond"`); such compound shapes can be set
/// as plain strings.
#[allow(missing_docs)]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum ArrowType {
    Box,
    Crow,
    Curve,
    ICurve,
    Diamond,
    Dot,
    Inv,
    None,
    Normal,
    Tee,
    Vee,
    EDiamond,
    Open,
    HalfOpen,
    Empty,
    InvEmpty,
}

/// Which ends of an edge carry arrowheads ([`Key::Dir`]).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum DirType {
    /// Arrowhead at the head end only
    Forward,
    /// Arrowhead at the tail end only
    Back,
    /// Arrowheads at both ends
    Both,
    /// No arrowheads
    None,
}

/// Edge routing modes ([`Key::Splines`]).
#[allow(missing_docs)]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum Splines {
    None,
    False,
    Line,
    True,
    Spline,
    Polyline,
    Ortho,
    Curved,
}

/// Cluster handling of the `dot` layout engine ([`Key::ClusterRank`]).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum ClusterMode {
    /// Clusters are laid out separately and drawn with a bounding box
    Local,
    /// Cluster subgraphs are treated as ordinary subgraphs
    Global,
    /// Same as `Global`
    None,
}

/// Layout direction of a ranked graph ([`Key::RankDir`]).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RankDir {
    /// Top to bottom (default)
    Tb,
    /// Left to right
    Lr,
    /// Bottom to top
    Bt,
    /// Right to left
    Rl,
}

/// Drawing styles for nodes, edges and clusters ([`Key::Style`]).
///
/// Not every style applies to every entity; `rounded`, `diagonals`, `striped` and `wedged`
/// only affect nodes and clusters, `tapered` only affects edges.
#[allow(missing_docs)]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    Solid,
    Dashed,
    Dotted,
    Bold,
    Rounded,
    Diagonals,
    Filled,
    Striped,
    Wedged,
    Tapered,
    Invis,
}

macro_rules! impl_string_value {
    ($($vocabulary:ty),+ $(,)?) => {
        $(
            impl From<$vocabulary> for AttributeValue {
                fn from(value: $vocabulary) -> Self {
                    AttributeValue::String(value.as_ref().to_string())
                }
            }
        )+
    };
}

impl_string_value!(Shape, ArrowType, DirType, Splines, ClusterMode, RankDir, Style);
