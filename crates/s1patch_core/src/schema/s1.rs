//! Roland S-1 patch parameters.
//!
//! Reference: parameter names and panel locations as shown on the S-1,
//! encodings worked out from exported patch files. Locations use `[BUTTON]`,
//! `(KNOB)`, `{menu}` and `⬆︎` for shifted functions.

use super::{ParameterDefinition, ValueMap};

const OFF_ON: ValueMap = &[("0", "Off"), ("1", "On")];

const STEP_LENGTHS: ValueMap = &[
    ("0", "1_8"),
    ("1", "1_16"),
    ("2", "1_32"),
    ("3", "8t"),
    ("4", "16t"),
    ("5", "32t"),
];

const ARP_TYPES: ValueMap = &[
    ("0", "OFF"),
    ("1", "Up"),
    ("2", "Down"),
    ("3", "Up/Down"),
    ("4", "Up 2"),
    ("5", "Down 2"),
    ("6", "Up/Down 2"),
    ("7", "Random"),
    ("8", "Random 2"),
];

const ARP_RATES: ValueMap = &[
    ("0", "1_4"),
    ("1", "1_8"),
    ("2", "1_16"),
    ("3", "1_32"),
    ("4", "8t"),
    ("5", "16t"),
    ("6", "32t"),
];

const LFO_RATES: ValueMap = &[
    ("0", "8_1"),
    ("1", "6_1"),
    ("2", "8_1t"),
    ("3", "4_1"),
    ("4", "3_1"),
    ("5", "4_1t"),
    ("6", "2_1"),
    ("7", "1d"),
    ("8", "2_1t"),
    ("9", "1_1"),
    ("10", "2d"),
    ("11", "1t"),
    ("12", "1_2"),
    ("13", "4d"),
    ("14", "2t"),
    ("15", "1_4"),
    ("16", "8d"),
    ("17", "4t"),
    ("18", "1_8"),
    ("19", "16d"),
    ("20", "8t"),
    ("21", "1_16"),
    ("22", "32d"),
    ("23", "16t"),
    ("24", "1_32"),
    ("25", "64d"),
    ("26", "32t"),
    ("27", "1_64"),
    ("28", "128d"),
    ("29", "64t"),
    ("30", "128"),
];

const LFO_WAVES: ValueMap = &[
    ("0", "Rising Saw"),
    ("1", "Descending Saw"),
    ("2", "Triangle"),
    ("3", "Square"),
    ("4", "Random"),
    ("5", "Noise"),
];

const OCTAVES: ValueMap = &[
    ("0", "64'"),
    ("1", "32'"),
    ("2", "16'"),
    ("3", "8'"),
    ("4", "4'"),
    ("5", "2'"),
];

const PWM_SOURCES: ValueMap = &[
    ("0", "Envelope"),
    ("1", "Manual (Width)"),
    ("2", "LFO"),
];

const SUB_OCTAVES: ValueMap = &[
    ("0", "-2(A)"),
    ("1", "-2(S)"),
    ("2", "-1"),
];

const AMP_MODES: ValueMap = &[
    ("0", "Gate"),
    ("1", "Envelope"),
];

const ENV_TRIGGERS: ValueMap = &[
    ("0", "LFO"),
    ("1", "Gate"),
    ("2", "Trigger"),
];

const PORTAMENTO_MODES: ValueMap = &[
    ("0", "Off"),
    ("1", "On"),
    ("2", "Auto"),
];

const NOISE_COLOURS: ValueMap = &[
    ("0", "Pink"),
    ("1", "White"),
];

const LFO_SPEEDS: ValueMap = &[
    ("0", "Normal"),
    ("1", "Fast"),
];

const CHORUS_TYPES: ValueMap = &[
    ("0", "Off"),
    ("1", "Standard (1)"),
    ("2", "Faster (2)"),
    ("3", "Rotary (3)"),
    ("4", "Relaxed (4)"),
];

const DELAY_NOTE: ValueMap = &[
    ("0", "128"),
    ("1", "64t"),
    ("2", "128d"),
    ("3", "1_64"),
    ("4", "32t"),
    ("5", "64d"),
    ("6", "1_32"),
    ("7", "16t"),
    ("8", "32d"),
    ("9", "1_16"),
    ("10", "8t"),
    ("11", "16d"),
    ("12", "1_8"),
    ("13", "4t"),
    ("14", "8d"),
    ("15", "1_4"),
];

const LOW_CUT: ValueMap = &[
    ("0", "Flat"),
    ("1", "20"),
    ("2", "25"),
    ("3", "31.5"),
    ("4", "40"),
    ("5", "50"),
    ("6", "63"),
    ("7", "80"),
    ("8", "100"),
    ("9", "125"),
    ("10", "160"),
    ("11", "200"),
    ("12", "250"),
    ("13", "315"),
    ("14", "400"),
    ("15", "500"),
    ("16", "630"),
    ("17", "800"),
];

const HIGH_CUT: ValueMap = &[
    ("0", "630"),
    ("1", "800"),
    ("2", "1k"),
    ("3", "1.25k"),
    ("4", "1.6k"),
    ("5", "2k"),
    ("6", "2.5k"),
    ("7", "3.15k"),
    ("8", "4k"),
    ("9", "5k"),
    ("10", "6.3k"),
    ("11", "8k"),
    ("12", "10k"),
    ("13", "12.5k"),
    ("14", "Flat"),
];

const REVERB_TYPES: ValueMap = &[
    ("0", "Ambience"),
    ("1", "Room"),
    ("2", "Hall 1"),
    ("3", "Hall 2"),
    ("4", "Plate"),
    ("5", "Spring"),
    ("6", "Modulated"),
];

const DRAW_MODES: ValueMap = &[
    ("0", "Off"),
    ("1", "Step"),
    ("2", "Slope"),
];

const RISER_MODES: ValueMap = &[
    ("0", "Off"),
    ("1", "Sync"),
    ("2", "Quick Interval"),
    ("3", "Quick Pan"),
];

const MOTION_TARGETS: ValueMap = &[
    ("0", "Off"),
    ("1", "Modulation"),
    ("2", "Frequency"),
    ("3", "Resonance"),
    ("4", "Pitch Bend"),
    ("5", "Pan"),
    ("6", "Expression"),
    ("7", "Delay Level"),
    ("8", "Reverb Level"),
];

pub static PARAMETERS: &[ParameterDefinition] = &[
    ParameterDefinition::int(
        "LENG",
        "Pattern Length/Last",
        "[LAST]",
        1..=64,
        16,
    ),
    ParameterDefinition::dict(
        "SCALE",
        "Pattern Scale (Step Length)",
        "{P.SCL}",
        STEP_LENGTHS,
        1,
    ),
    ParameterDefinition::int(
        "TRANSPOSE",
        "Key Transpose",
        "⬆︎[STEP]",
        -60..=60,
        0,
    ),
    ParameterDefinition::int(
        "LEVEL",
        "Overall Volume",
        "{vOL}",
        0..=127,
        70,
    ),
    // BPM x 100.
    ParameterDefinition::div100(
        "TEMPO",
        "Tempo",
        "(TEMPO)",
        400..=30000,
        10000,
    ),
    ParameterDefinition::int(
        "SHUFFLE",
        "Shuffle",
        "[SHUFFLE]",
        -90..=90,
        0,
    ),
    ParameterDefinition::dict(
        "ARP_TYPE",
        "Arp Type",
        "A[ON]/A[TYPE]",
        ARP_TYPES,
        0,
    ),
    ParameterDefinition::dict(
        "ARP_RATE",
        "Arp Rate",
        "A[RATE]",
        ARP_RATES,
        2,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC1",
        "Motion Control 1",
        "",
        -1,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC2",
        "Motion Control 2",
        "",
        -1,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC3",
        "Motion Control 3",
        "",
        -1,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC4",
        "Motion Control 4",
        "",
        -1,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC5",
        "Motion Control 5",
        "",
        -1,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC6",
        "Motion Control 6",
        "",
        -1,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC7",
        "Motion Control 7",
        "",
        -1,
    ),
    ParameterDefinition::unknown(
        "MOTION_CC8",
        "Motion Control 8",
        "",
        -1,
    ),
    // A note value while LFO_SYNC is on. With sync off the device stores a
    // free-running rate here, which is what the default is.
    ParameterDefinition::dict(
        "LFO_RATE",
        "LFO Rate",
        "L(LFO)",
        LFO_RATES,
        120,
    ),
    ParameterDefinition::dict(
        "LFO_WAVE_FORM",
        "LFO Waveform",
        "L(WAVE)",
        LFO_WAVES,
        2,
    ),
    ParameterDefinition::int(
        "VCO_MOD_DEPTH",
        "Oscillator LFO",
        "O(LFO)",
        0..=255,
        0,
    ),
    ParameterDefinition::dict(
        "VCO_RANGE",
        "Oscillator Octave",
        "O(RANGE)",
        OCTAVES,
        2,
    ),
    ParameterDefinition::int(
        "VCO_PULSE_WIDTH",
        "Oscillator Pulse Width / Mod Depth",
        "[PWM DEPTH]",
        0..=255,
        0,
    ),
    ParameterDefinition::dict(
        "VCO_PWM_SOURCE",
        "Oscillator PWM Source",
        "[PWM SRC]",
        PWM_SOURCES,
        2,
    ),
    ParameterDefinition::int(
        "VCO_PWM_LEVEL",
        "Oscillator PWM Level",
        "O(╚╔╝╗)",
        0..=255,
        255,
    ),
    ParameterDefinition::int(
        "VCO_SAW_LEVEL",
        "Oscillator Saw Level",
        "O(⩘)",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "VCO_SUB_LEVEL",
        "Oscillator Sub Level",
        "O(SUB)",
        0..=255,
        0,
    ),
    ParameterDefinition::dict(
        "VCO_SUB_TYPE",
        "Oscillator Sub Octave",
        "[SUB OCT]",
        SUB_OCTAVES,
        2,
    ),
    ParameterDefinition::int(
        "VCO_NOISE_LEVEL",
        "Oscillator Noise Level",
        "O(NOISE)",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "VCF_CUTOFF",
        "Filter Cutoff",
        "F(FREQ)",
        0..=255,
        255,
    ),
    ParameterDefinition::int(
        "VCF_RESONANCE",
        "Filter Resonance",
        "F(RESO)",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "VCF_ENV_DEPTH",
        "Filter Envelope Depth",
        "F(ENV)",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "VCF_MOD_DEPTH",
        "Filter LFO Depth",
        "F(LFO)",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "VCF_KEY_FOLLOW",
        "Filter Keyboard Follow",
        "[KYBD]",
        0..=255,
        0,
    ),
    ParameterDefinition::dict(
        "VCA_ENV_MODE",
        "Amp Mode",
        "[AMP]",
        AMP_MODES,
        1,
    ),
    ParameterDefinition::dict(
        "ENV_TRG_MODE",
        "Envelope Trigger Mode",
        "[ENV TRIG]",
        ENV_TRIGGERS,
        2,
    ),
    ParameterDefinition::int(
        "ENV_ATTACK",
        "Envelope Attack",
        "E(ATTACK)",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "ENV_DECAY",
        "Envelope Decay",
        "E(DECAY)",
        0..=255,
        84,
    ),
    ParameterDefinition::int(
        "ENV_SUSTAIN",
        "Envelope Sustain",
        "E(SUSTAIN)",
        0..=255,
        51,
    ),
    ParameterDefinition::int(
        "ENV_RELEASE",
        "Envelope Release",
        "E(RELEASE)",
        0..=255,
        42,
    ),
    ParameterDefinition::unknown(
        "ASSIGN_MODE",
        "Assign Mode",
        "",
        2,
    ),
    ParameterDefinition::dict(
        "CHORD_VOICE2_SW",
        "Chord Voice 2 Switch",
        "[POLY]{Chd}{v2.SW}",
        OFF_ON,
        1,
    ),
    ParameterDefinition::dict(
        "CHORD_VOICE3_SW",
        "Chord Voice 3 Switch",
        "[POLY]{Chd}{v3.SW}",
        OFF_ON,
        1,
    ),
    ParameterDefinition::dict(
        "CHORD_VOICE4_SW",
        "Chord Voice 4 Switch",
        "[POLY]{Chd}{v4.SW}",
        OFF_ON,
        1,
    ),
    ParameterDefinition::int(
        "CHORD_VOICE2_KEY_SHIFT",
        "Chord Voice 2 Shift",
        "[POLY]{Chd}{v2.KS}",
        -12..=12,
        12,
    ),
    ParameterDefinition::int(
        "CHORD_VOICE3_KEY_SHIFT",
        "Chord Voice 3 Shift",
        "[POLY]{Chd}{v3.KS}",
        -12..=12,
        7,
    ),
    ParameterDefinition::int(
        "CHORD_VOICE4_KEY_SHIFT",
        "Chord Voice 4 Shift",
        "[POLY]{Chd}{v4.KS}",
        -12..=12,
        5,
    ),
    ParameterDefinition::int(
        "VCO_BEND_SENS",
        "Oscillator Bend Sensitivity",
        "{bnd.o}",
        0..=240,
        20,
    ),
    ParameterDefinition::int(
        "VCF_BEND_SENS",
        "Filter Bend Sensitivity",
        "{bnd.F}",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "LFO_MOD_DEPTH",
        "D-M/MIDI LFO Modulation Depth",
        "{Mod.d}",
        0..=255,
        30,
    ),
    ParameterDefinition::dict(
        "PORTAMENTO_MODE",
        "Portamento Mode",
        "[PORTA ON]",
        PORTAMENTO_MODES,
        0,
    ),
    ParameterDefinition::int(
        "PORTAMENTO_TIME",
        "Portamento Time",
        "[PORTA TIME]",
        0..=255,
        30,
    ),
    ParameterDefinition::dict(
        "NOISE_MODE",
        "Noise Mode",
        "i{nS.Md}",
        NOISE_COLOURS,
        0,
    ),
    ParameterDefinition::dict(
        "LFO_MODE",
        "LFO Mode",
        "LFO.M",
        LFO_SPEEDS,
        0,
    ),
    // Shown on the device as -1.0 to +1.0.
    ParameterDefinition::int(
        "FINE_TUNE",
        "Oscillator Range Fine Tune",
        "⬆︎(RANGE)",
        0..=255,
        128,
    ),
    ParameterDefinition::dict(
        "TEMPO_SYNC",
        "Delay Sync",
        "[DELAY]{d.Syn}",
        OFF_ON,
        1,
    ),
    ParameterDefinition::dict(
        "CHORUS",
        "Chorus",
        "{Cho}",
        CHORUS_TYPES,
        0,
    ),
    ParameterDefinition::int(
        "DELAY_LEVEL",
        "Delay Volume",
        "EFX(DELAY) / [DELAY]{LEv}",
        0..=255,
        0,
    ),
    // Used while TEMPO_SYNC is off.
    ParameterDefinition::int(
        "DELAY_TIME",
        "Delay Time",
        "[DELAY]{tiME}",
        1..=740,
        174,
    ),
    // Used while TEMPO_SYNC is on.
    ParameterDefinition::dict(
        "DELAY_TEMPO",
        "Delay Tempo",
        "[DELAY]{tiME}",
        DELAY_NOTE,
        14,
    ),
    ParameterDefinition::int(
        "DELAY_FEEDBACK",
        "Delay Feedback",
        "[DELAY]{FdbK}",
        0..=255,
        136,
    ),
    ParameterDefinition::dict(
        "DELAY_LOW_CUT",
        "Delay Low-Cut Filter",
        "[DELAY]{Lo.Ct}",
        LOW_CUT,
        12,
    ),
    ParameterDefinition::dict(
        "DELAY_HIGH_CUT",
        "Delay High-Cut Filter",
        "[DELAY]{Hi.Ct}",
        HIGH_CUT,
        14,
    ),
    ParameterDefinition::unknown(
        "DELAY_SW",
        "Delay Switch",
        "[DELAY]{d.SYn}",
        1,
    ),
    ParameterDefinition::dict(
        "REVERB_TYPE",
        "Reverb Type",
        "[REVERB]{tyPE}",
        REVERB_TYPES,
        5,
    ),
    ParameterDefinition::int(
        "REVERB_TIME",
        "Reverb Time",
        "[REVERB]{tiME}",
        0..=255,
        200,
    ),
    ParameterDefinition::int(
        "REVERB_LEVEL",
        "Reverb Level",
        "EFX(REVERB) / [REVERB]{LEv}",
        0..=255,
        0,
    ),
    ParameterDefinition::int(
        "REVERB_PRE_DELAY",
        "Reverb Pre-Delay",
        "[REVERB]{Pr.dL}",
        0..=100,
        20,
    ),
    ParameterDefinition::dict(
        "REVERB_LOW_CUT",
        "Reverb Low-Cut Filter",
        "[REVERB]{Lo.Ct}",
        LOW_CUT,
        12,
    ),
    ParameterDefinition::dict(
        "REVERB_HIGH_CUT",
        "Reverb High-Cut Filter",
        "[REVERB]{Hi.Ct}",
        HIGH_CUT,
        13,
    ),
    ParameterDefinition::int(
        "REVERB_DENSITY",
        "Reverb Density",
        "[REVERB]{dEnS}",
        0..=10,
        10,
    ),
    ParameterDefinition::dict(
        "OSC_DRAW_SW",
        "Oscillator Draw Switch",
        "[DRAW]{SW}",
        DRAW_MODES,
        0,
    ),
    ParameterDefinition::int(
        "OSC_DRAW_MULT",
        "Oscillator Draw Multiplier",
        "[DRAW]{MULt}",
        0..=255,
        7,
    ),
    // Two pads per word, the higher-numbered pad in the high byte.
    ParameterDefinition::split_tc(
        "OSC_DRAW_P1",
        "Oscillator Draw A 1/2",
        "[DRAW]{ForM}",
        46492,
    ),
    ParameterDefinition::split_tc(
        "OSC_DRAW_P2",
        "Oscillator Draw B 3/4",
        "[DRAW]{ForM}",
        59342,
    ),
    ParameterDefinition::split_tc(
        "OSC_DRAW_P3",
        "Oscillator Draw C 5/6",
        "[DRAW]{ForM}",
        6400,
    ),
    ParameterDefinition::split_tc(
        "OSC_DRAW_P4",
        "Oscillator Draw D 7/8",
        "[DRAW]{ForM}",
        19250,
    ),
    ParameterDefinition::split_tc(
        "OSC_DRAW_P5",
        "Oscillator Draw E 9/10",
        "[DRAW]{ForM}",
        19300,
    ),
    ParameterDefinition::split_tc(
        "OSC_DRAW_P6",
        "Oscillator Draw F 11/12",
        "[DRAW]{ForM}",
        6450,
    ),
    ParameterDefinition::split_tc(
        "OSC_DRAW_P7",
        "Oscillator Draw G 13/14",
        "[DRAW]{ForM}",
        59136,
    ),
    ParameterDefinition::split_tc(
        "OSC_DRAW_P8",
        "Oscillator Draw H 15/16",
        "[DRAW]{ForM}",
        46542,
    ),
    ParameterDefinition::unknown(
        "OSC_CHOP_TYPE",
        "Oscillator Chop Type",
        "",
        0,
    ),
    ParameterDefinition::int(
        "OSC_CHOP_OVERTONE",
        "Oscillator Chop Overtone",
        "[CHOP]{ovtn}",
        0..=200,
        100,
    ),
    ParameterDefinition::unknown(
        "OSC_CHOP_COMB_TYPE",
        "Oscillator Chop Comb Type",
        "",
        0,
    ),
    ParameterDefinition::comb(
        "OSC_CHOP_COMB",
        "Oscillator Chop Comb",
        "[CHOP]{CoMb}",
        0..=255,
        7,
    ),
    // Bit 0 is the first pad.
    ParameterDefinition::chop(
        "OSC_CHOP_PWM",
        "Oscillator Chop Square Pattern",
        "[CHOP]{Sqr.P}",
        65535,
    ),
    ParameterDefinition::chop(
        "OSC_CHOP_SAW",
        "Oscillator Chop Saw Pattern",
        "[CHOP]{SAW.P}",
        65535,
    ),
    ParameterDefinition::chop(
        "OSC_CHOP_SUB",
        "Oscillator Chop Sub Pattern",
        "[CHOP]{SUb.P}",
        65535,
    ),
    ParameterDefinition::chop(
        "OSC_CHOP_NOISE",
        "Oscillator Chop Noise Pattern",
        "[CHOP]{noi.P}",
        65535,
    ),
    ParameterDefinition::dict(
        "RISER_MODE",
        "Riser Mode",
        "{rS.Md}",
        RISER_MODES,
        0,
    ),
    ParameterDefinition::unknown(
        "RISER_SW",
        "Riser Switch",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "RISER_CTRL",
        "Riser Control",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "RISER_BEAT",
        "Riser Beat",
        "",
        0,
    ),
    ParameterDefinition::int(
        "RISER_RESO",
        "Riser Resonance",
        "rS.rS",
        0..=100,
        50,
    ),
    ParameterDefinition::int(
        "RISER_LEVEL",
        "Riser Level",
        "rS.Lv",
        0..=100,
        70,
    ),
    ParameterDefinition::dict(
        "DM_ASSIGN_X",
        "D-Motion Roll",
        "⬆︎[D-MOTION]{roLL}",
        MOTION_TARGETS,
        5,
    ),
    ParameterDefinition::dict(
        "DM_ASSIGN_Y",
        "D-Motion Pitch",
        "⬆︎[D-MOTION]{Ptch}",
        MOTION_TARGETS,
        6,
    ),
    ParameterDefinition::unknown(
        "DM_ASSIGN_TAP",
        "D-Motion Assign Tap",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "DM_ASSIGN_FF",
        "D-Motion Assign FF",
        "",
        0,
    ),
    ParameterDefinition::int(
        "DM_SENS_X",
        "D-Motion Roll Sensitivity",
        "r.SnS",
        0..=65535,
        5,
    ),
    ParameterDefinition::int(
        "DM_SENS_Y",
        "D-Motion Pitch Sensitivity",
        "P.SnS",
        0..=65535,
        5,
    ),
    ParameterDefinition::dict(
        "LFO_KEY_TRIG",
        "LFO Key Trigger",
        "{LFO.K}",
        OFF_ON,
        0,
    ),
    ParameterDefinition::dict(
        "LFO_SYNC",
        "LFO Sync Mode",
        "{LFO.S}",
        OFF_ON,
        0,
    ),
    ParameterDefinition::int(
        "RISER_SHAPE",
        "Riser Shape",
        "{rS.Sh}",
        0..=100,
        0,
    ),
    ParameterDefinition::unknown(
        "PRM1",
        "PRM 1",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM2",
        "PRM 2",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM3",
        "PRM 3",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM4",
        "PRM 4",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM5",
        "PRM 5",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM6",
        "PRM 6",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM7",
        "PRM 7",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM8",
        "PRM 8",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM9",
        "PRM 9",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM10",
        "PRM 10",
        "",
        0,
    ),
    ParameterDefinition::unknown(
        "PRM11",
        "PRM 11",
        "",
        0,
    ),
];
