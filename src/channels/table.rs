#![allow(clippy::enum_glob_use)]

use super::{CumulativeMode::*, DeviceKind::*, KnownChannel, Unit::*};

/// Status codes shared by the enumeration channels.
const COMMON_STATUSES: &[(i64, &str)] = &[
    (55, "Communication error"),
    (303, "Off"),
    (304, "Island operation"),
    (305, "Island operation"),
    (306, "SMA island operation 60 Hz"),
    (307, "Ok"),
    (308, "On"),
    (309, "Operating"),
    (310, "General operating mode"),
    (311, "Open"),
    (312, "Phase assignment"),
    (313, "SMA island operation 50 Hz"),
    (314, "Maximum active power"),
    (315, "Maximum active power output"),
    (316, "Active power setpoint operating mode"),
    (317, "All phases"),
    (318, "Overload"),
    (319, "Overtemperature"),
    (454, "Calibration"),
    (455, "Warning"),
    (456, "Waiting for DC start conditions"),
    (457, "Waiting for grid voltage"),
];

pub static KNOWN_CHANNELS: &[KnownChannel] = &[
    KnownChannel {
        id: "Measurement.GridMs.TotVAr",
        name: "Grid Reactive Power",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.TotVAr.Pv",
        name: "PV Reactive Power",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.TotW",
        name: "Grid Power",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.TotW.Pv",
        name: "PV Power",
        unit: Watt,
        device_kind: Pv,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Inverter.CurWCtlNom",
        name: "Active Power Limit",
        unit: Percent,
        device_kind: Pv,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Inverter.WAval",
        name: "Available Inverter Power",
        unit: Watt,
        device_kind: Pv,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWIn.Bat",
        name: "Power drawn by Battery",
        unit: Watt,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWOut.Bat",
        name: "Power fed into Battery",
        unit: Watt,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWhIn.Bat",
        name: "total power drawn by Battery",
        unit: WattHour,
        device_kind: Battery,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWhOut.Bat",
        name: "total power fed into Battery",
        unit: WattHour,
        device_kind: Battery,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntA.phsA",
        name: "Grid interconnection current L1",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntA.phsB",
        name: "Grid interconnection current L2",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntA.phsC",
        name: "Grid interconnection current L3",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntCsmpW",
        name: "Power drawn from grid",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntCsmpWh",
        name: "Total power drawn from grid",
        unit: WattHour,
        device_kind: Grid,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntPF",
        name: "Grid interconnection displacement power factor",
        unit: Percent,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntPhV.phsA",
        name: "Grid interconnection voltage L1",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntPhV.phsB",
        name: "Grid interconnection voltage L2",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntPhV.phsC",
        name: "Grid interconnection voltage L3",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntVAr",
        name: "Grid interconnection reactive power",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntVAr.phsA",
        name: "Grid interconnection reactive power L1",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntVAr.phsB",
        name: "Grid interconnection reactive power L2",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntVAr.phsC",
        name: "Grid interconnection reactive power L3",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntW",
        name: "Grid interconnection power feed-in",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntW.phsA",
        name: "Grid interconnection power feed-in L1",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntW.phsB",
        name: "Grid interconnection power feed-in L2",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntW.phsC",
        name: "Grid interconnection power feed-in L3",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.PCCMs.PlntWh",
        name: "Grid interconnection total power feed-in",
        unit: WattHour,
        device_kind: Grid,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.TotWhOut.Pv",
        name: "Total PV yield",
        unit: WattHour,
        device_kind: Pv,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.CurAvailPlnt",
        name: "Generation plant availability",
        unit: Percent,
        device_kind: Other,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.CurAvailVArOvExt",
        name: "available overexcited reactive power",
        unit: VoltAmpereReactive,
        device_kind: Other,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.CurAvailVArOvExtNom",
        name: "available overexcited reactive power",
        unit: Percent,
        device_kind: Other,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.CurAvailVArUnExt",
        name: "available underexcited reactive power",
        unit: VoltAmpereReactive,
        device_kind: Other,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.CurAvailVArUnExtNom",
        name: "available underexcited reactive power",
        unit: Percent,
        device_kind: Other,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.Health",
        name: "device health status",
        unit: Enum,
        device_kind: Other,
        cumulative_mode: None,
        statuses: COMMON_STATUSES,
    },
    KnownChannel {
        id: "Measurement.Operation.WMaxInLimNom",
        name: "maximum active power setpoint (grid supply)",
        unit: Percent,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.WMaxLimNom",
        name: "maximum active power setpoint specification",
        unit: Percent,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.WMinInLimNom",
        name: "minimum active power setpoint (grid supply)",
        unit: Percent,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Operation.WMinLimNom",
        name: "minimum active power setpoint specification",
        unit: Percent,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.A.phsA",
        name: "Grid current L1",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.A.phsB",
        name: "Grid current L2",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.A.phsC",
        name: "Grid current L3",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.PhV.phsA",
        name: "Grid voltage L1",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.PhV.phsB",
        name: "Grid voltage L2",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.PhV.phsC",
        name: "Grid voltage L3",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotPF",
        name: "Grid displacement power factor",
        unit: Percent,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotVA",
        name: "Grid apparent power",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotVAr",
        name: "Grid reactive power",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWIn",
        name: "Grid power drawn",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWOut",
        name: "Grid power fed-in",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWhIn",
        name: "Total power drawn from grid",
        unit: WattHour,
        device_kind: Grid,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.TotWhOut",
        name: "Total power fed into grid",
        unit: WattHour,
        device_kind: Grid,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.VA.phsA",
        name: "Grid apparent power L1",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.VA.phsB",
        name: "Grid apparent power L2",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.VA.phsC",
        name: "Grid apparent power L3",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.VAr.phsA",
        name: "Grid reactive power L1",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.VAr.phsB",
        name: "Grid reactive power L2",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.VAr.phsC",
        name: "Grid reactive power L3",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.W.phsA",
        name: "Grid power drawn L1",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.W.phsB",
        name: "Grid power drawn L2",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Metering.GridMs.W.phsC",
        name: "Grid power drawn L3",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Amp",
        name: "Battery current",
        unit: Ampere,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.ChaStt",
        name: "Battery Charge State",
        unit: Percent,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.ActlCapacNom",
        name: "current battery capacity",
        unit: Percent,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.CapacThrpCnt",
        name: "battery charge cycles",
        unit: PlainNumber,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.ChaAMax",
        name: "maximum charge current",
        unit: Ampere,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.CntErrOvV",
        name: "battery overvoltage error count",
        unit: PlainNumber,
        device_kind: Battery,
        cumulative_mode: Some(Counter),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.CntWrnOvV",
        name: "battery overvoltage warning count",
        unit: PlainNumber,
        device_kind: Battery,
        cumulative_mode: Some(Counter),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.CntWrnSOCLo",
        name: "battery low SOC warning count",
        unit: PlainNumber,
        device_kind: Battery,
        cumulative_mode: Some(Counter),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.DschAMax",
        name: "maximum discharge current",
        unit: Ampere,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.StatTm",
        name: "battery operating time",
        unit: Second,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.TmpValMax",
        name: "maximum battery temperature",
        unit: Celsius,
        device_kind: Battery,
        cumulative_mode: Some(Maximum),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.TmpValMin",
        name: "minimum battery temperature",
        unit: Celsius,
        device_kind: Battery,
        cumulative_mode: Some(Minimum),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.TotAhIn",
        name: "total battery charge",
        unit: Ampere,
        device_kind: Battery,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.TotAhOut",
        name: "total battery discharge",
        unit: Ampere,
        device_kind: Battery,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Diag.VolMax",
        name: "maximum battery voltage",
        unit: Volt,
        device_kind: Battery,
        cumulative_mode: Some(Maximum),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.TmpVal",
        name: "Battery temperature",
        unit: Celsius,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Bat.Vol",
        name: "Battery voltage",
        unit: Volt,
        device_kind: Battery,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Coolsys.Inverter.TmpVal",
        name: "Inverter temperature",
        unit: Celsius,
        device_kind: Other,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.Coolsys.Tr.TmpVal",
        name: "Transformer temperature",
        unit: Celsius,
        device_kind: Other,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.A.phsA",
        name: "external grid current L1",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.A.phsB",
        name: "external grid current L2",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.A.phsC",
        name: "external grid current L3",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.Hz",
        name: "external grid frequency",
        unit: Hertz,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.HzMax",
        name: "maximum external grid frequency",
        unit: Hertz,
        device_kind: Grid,
        cumulative_mode: Some(Maximum),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.HzMin",
        name: "minimum external grid frequency",
        unit: Hertz,
        device_kind: Grid,
        cumulative_mode: Some(Minimum),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.PhV.phsA",
        name: "external grid voltage L1",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.PhV.phsB",
        name: "external grid voltage L2",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.PhV.phsC",
        name: "external grid voltage L3",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.TotA",
        name: "external grid current",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.TotVAr",
        name: "external grid reactive power",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.TotW",
        name: "external grid power output",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.TotWhIn",
        name: "total power drawn from external grid",
        unit: WattHour,
        device_kind: Grid,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.TotWhOut",
        name: "total power fed into external grid",
        unit: WattHour,
        device_kind: Grid,
        cumulative_mode: Some(Total),
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.VAr.phsA",
        name: "external grid reactive power L1",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.VAr.phsB",
        name: "external grid reactive power L2",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.VAr.phsC",
        name: "external grid reactive power L3",
        unit: VoltAmpereReactive,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.W.phsA",
        name: "external grid power output L1",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.W.phsB",
        name: "external grid power output L2",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.ExtGridMs.W.phsC",
        name: "external grid power output L3",
        unit: Watt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.A.phsA",
        name: "grid current L1",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.A.phsB",
        name: "grid current L2",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.A.phsC",
        name: "grid current L3",
        unit: Ampere,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.Hz",
        name: "grid frequency",
        unit: Hertz,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.PhV.phsA",
        name: "grid voltage L1",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.PhV.phsB",
        name: "grid voltage L2",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.GridMs.PhV.phsC",
        name: "grid voltage L3",
        unit: Volt,
        device_kind: Grid,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.DcMs.Vol[]",
        name: "dc voltage",
        unit: Volt,
        device_kind: Pv,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.DcMs.Amp[]",
        name: "dc current",
        unit: Ampere,
        device_kind: Pv,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.DcMs.Watt[]",
        name: "dc power",
        unit: Watt,
        device_kind: Pv,
        cumulative_mode: None,
        statuses: &[],
    },
    KnownChannel {
        id: "Measurement.MltFncSw.SttMstr",
        name: "multi-function relay status",
        unit: Enum,
        device_kind: Other,
        cumulative_mode: None,
        statuses: COMMON_STATUSES,
    },
];
