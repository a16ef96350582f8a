//! Legacy tag tables for the `org.datavec.api` families
//!
//! Legacy documents tagged polymorphic values with the bare short type name.
//! These tables must stay verbatim: dropping or renaming an entry breaks
//! loading of previously saved documents. Two entries do not follow the
//! short-name rule (`ConvertToStringTransform`, `InvalidNumCols`).

pub type LegacyTable = &'static [(&'static str, &'static str)];

pub const TRANSFORM: LegacyTable = &[
    ("CategoricalToIntegerTransform", "org.datavec.api.transform.transform.categorical.CategoricalToIntegerTransform"),
    ("CategoricalToOneHotTransform", "org.datavec.api.transform.transform.categorical.CategoricalToOneHotTransform"),
    ("IntegerToCategoricalTransform", "org.datavec.api.transform.transform.categorical.IntegerToCategoricalTransform"),
    ("StringToCategoricalTransform", "org.datavec.api.transform.transform.categorical.StringToCategoricalTransform"),
    ("DuplicateColumnsTransform", "org.datavec.api.transform.transform.column.DuplicateColumnsTransform"),
    ("RemoveColumnsTransform", "org.datavec.api.transform.transform.column.RemoveColumnsTransform"),
    ("RenameColumnsTransform", "org.datavec.api.transform.transform.column.RenameColumnsTransform"),
    ("ReorderColumnsTransform", "org.datavec.api.transform.transform.column.ReorderColumnsTransform"),
    ("ConditionalCopyValueTransform", "org.datavec.api.transform.transform.condition.ConditionalCopyValueTransform"),
    ("ConditionalReplaceValueTransform", "org.datavec.api.transform.transform.condition.ConditionalReplaceValueTransform"),
    ("ConditionalReplaceValueTransformWithDefault", "org.datavec.api.transform.transform.condition.ConditionalReplaceValueTransformWithDefault"),
    ("DoubleColumnsMathOpTransform", "org.datavec.api.transform.transform.doubletransform.DoubleColumnsMathOpTransform"),
    ("DoubleMathOpTransform", "org.datavec.api.transform.transform.doubletransform.DoubleMathOpTransform"),
    ("Log2Normalizer", "org.datavec.api.transform.transform.doubletransform.Log2Normalizer"),
    ("MinMaxNormalizer", "org.datavec.api.transform.transform.doubletransform.MinMaxNormalizer"),
    ("StandardizeNormalizer", "org.datavec.api.transform.transform.doubletransform.StandardizeNormalizer"),
    ("SubtractMeanNormalizer", "org.datavec.api.transform.transform.doubletransform.SubtractMeanNormalizer"),
    ("IntegerColumnsMathOpTransform", "org.datavec.api.transform.transform.integer.IntegerColumnsMathOpTransform"),
    ("IntegerMathOpTransform", "org.datavec.api.transform.transform.integer.IntegerMathOpTransform"),
    ("ReplaceEmptyIntegerWithValueTransform", "org.datavec.api.transform.transform.integer.ReplaceEmptyIntegerWithValueTransform"),
    ("ReplaceInvalidWithIntegerTransform", "org.datavec.api.transform.transform.integer.ReplaceInvalidWithIntegerTransform"),
    ("LongColumnsMathOpTransform", "org.datavec.api.transform.transform.longtransform.LongColumnsMathOpTransform"),
    ("LongMathOpTransform", "org.datavec.api.transform.transform.longtransform.LongMathOpTransform"),
    ("MapAllStringsExceptListTransform", "org.datavec.api.transform.transform.string.MapAllStringsExceptListTransform"),
    ("RemoveWhiteSpaceTransform", "org.datavec.api.transform.transform.string.RemoveWhiteSpaceTransform"),
    ("ReplaceEmptyStringTransform", "org.datavec.api.transform.transform.string.ReplaceEmptyStringTransform"),
    ("ReplaceStringTransform", "org.datavec.api.transform.transform.string.ReplaceStringTransform"),
    ("StringListToCategoricalSetTransform", "org.datavec.api.transform.transform.string.StringListToCategoricalSetTransform"),
    ("StringMapTransform", "org.datavec.api.transform.transform.string.StringMapTransform"),
    ("DeriveColumnsFromTimeTransform", "org.datavec.api.transform.transform.time.DeriveColumnsFromTimeTransform"),
    ("StringToTimeTransform", "org.datavec.api.transform.transform.time.StringToTimeTransform"),
    ("TimeMathOpTransform", "org.datavec.api.transform.transform.time.TimeMathOpTransform"),
    ("ReduceSequenceByWindowTransform", "org.datavec.api.transform.sequence.window.ReduceSequenceByWindowTransform"),
    ("DoubleMathFunctionTransform", "org.datavec.api.transform.transform.doubletransform.DoubleMathFunctionTransform"),
    ("AddConstantColumnTransform", "org.datavec.api.transform.transform.column.AddConstantColumnTransform"),
    ("RemoveAllColumnsExceptForTransform", "org.datavec.api.transform.transform.column.RemoveAllColumnsExceptForTransform"),
    ("ParseDoubleTransform", "org.datavec.api.transform.transform.parse.ParseDoubleTransform"),
    ("ConvertToStringTransform", "org.datavec.api.transform.transform.string.ConvertToString"),
    ("AppendStringColumnTransform", "org.datavec.api.transform.transform.string.AppendStringColumnTransform"),
    ("SequenceDifferenceTransform", "org.datavec.api.transform.transform.sequence.SequenceDifferenceTransform"),
    ("ReduceSequenceTransform", "org.datavec.api.transform.sequence.ReduceSequenceTransform"),
    ("SequenceMovingWindowReduceTransform", "org.datavec.api.transform.transform.sequence.SequenceMovingWindowReduceTransform"),
    ("IntegerToOneHotTransform", "org.datavec.api.transform.transform.integer.IntegerToOneHotTransform"),
    ("SequenceTrimTransform", "org.datavec.api.transform.sequence.trim.SequenceTrimTransform"),
    ("SequenceOffsetTransform", "org.datavec.api.transform.transform.sequence.SequenceOffsetTransform"),
    ("NDArrayColumnsMathOpTransform", "org.datavec.api.transform.ndarray.NDArrayColumnsMathOpTransform"),
    ("NDArrayDistanceTransform", "org.datavec.api.transform.ndarray.NDArrayDistanceTransform"),
    ("NDArrayMathFunctionTransform", "org.datavec.api.transform.ndarray.NDArrayMathFunctionTransform"),
    ("NDArrayScalarOpTransform", "org.datavec.api.transform.ndarray.NDArrayScalarOpTransform"),
    ("ChangeCaseStringTransform", "org.datavec.api.transform.transform.string.ChangeCaseStringTransform"),
    ("ConcatenateStringColumns", "org.datavec.api.transform.transform.string.ConcatenateStringColumns"),
    ("StringListToCountsNDArrayTransform", "org.datavec.api.transform.transform.string.StringListToCountsNDArrayTransform"),
    ("StringListToIndicesNDArrayTransform", "org.datavec.api.transform.transform.string.StringListToIndicesNDArrayTransform"),
    ("PivotTransform", "org.datavec.api.transform.transform.categorical.PivotTransform"),
    ("TextToCharacterIndexTransform", "org.datavec.api.transform.transform.nlp.TextToCharacterIndexTransform"),
];

pub const COLUMN_ANALYSIS: LegacyTable = &[
    ("BytesAnalysis", "org.datavec.api.transform.analysis.columns.BytesAnalysis"),
    ("CategoricalAnalysis", "org.datavec.api.transform.analysis.columns.CategoricalAnalysis"),
    ("DoubleAnalysis", "org.datavec.api.transform.analysis.columns.DoubleAnalysis"),
    ("IntegerAnalysis", "org.datavec.api.transform.analysis.columns.IntegerAnalysis"),
    ("LongAnalysis", "org.datavec.api.transform.analysis.columns.LongAnalysis"),
    ("StringAnalysis", "org.datavec.api.transform.analysis.columns.StringAnalysis"),
    ("TimeAnalysis", "org.datavec.api.transform.analysis.columns.TimeAnalysis"),
];

pub const CONDITION: LegacyTable = &[
    ("TrivialColumnCondition", "org.datavec.api.transform.condition.column.TrivialColumnCondition"),
    ("CategoricalColumnCondition", "org.datavec.api.transform.condition.column.CategoricalColumnCondition"),
    ("DoubleColumnCondition", "org.datavec.api.transform.condition.column.DoubleColumnCondition"),
    ("IntegerColumnCondition", "org.datavec.api.transform.condition.column.IntegerColumnCondition"),
    ("LongColumnCondition", "org.datavec.api.transform.condition.column.LongColumnCondition"),
    ("NullWritableColumnCondition", "org.datavec.api.transform.condition.column.NullWritableColumnCondition"),
    ("StringColumnCondition", "org.datavec.api.transform.condition.column.StringColumnCondition"),
    ("TimeColumnCondition", "org.datavec.api.transform.condition.column.TimeColumnCondition"),
    ("StringRegexColumnCondition", "org.datavec.api.transform.condition.string.StringRegexColumnCondition"),
    ("BooleanCondition", "org.datavec.api.transform.condition.BooleanCondition"),
    ("NaNColumnCondition", "org.datavec.api.transform.condition.column.NaNColumnCondition"),
    ("InfiniteColumnCondition", "org.datavec.api.transform.condition.column.InfiniteColumnCondition"),
    ("SequenceLengthCondition", "org.datavec.api.transform.condition.sequence.SequenceLengthCondition"),
];

pub const FILTER: LegacyTable = &[
    ("ConditionFilter", "org.datavec.api.transform.filter.ConditionFilter"),
    ("FilterInvalidValues", "org.datavec.api.transform.filter.FilterInvalidValues"),
    ("InvalidNumCols", "org.datavec.api.transform.filter.InvalidNumColumns"),
];

pub const COLUMN_METADATA: LegacyTable = &[
    ("Categorical", "org.datavec.api.transform.metadata.CategoricalMetaData"),
    ("Double", "org.datavec.api.transform.metadata.DoubleMetaData"),
    ("Float", "org.datavec.api.transform.metadata.FloatMetaData"),
    ("Integer", "org.datavec.api.transform.metadata.IntegerMetaData"),
    ("Long", "org.datavec.api.transform.metadata.LongMetaData"),
    ("String", "org.datavec.api.transform.metadata.StringMetaData"),
    ("Time", "org.datavec.api.transform.metadata.TimeMetaData"),
    ("NDArray", "org.datavec.api.transform.metadata.NDArrayMetaData"),
];

pub const SORTED_RANK: LegacyTable = &[
    ("CalculateSortedRank", "org.datavec.api.transform.rank.CalculateSortedRank"),
];

pub const SCHEMA: LegacyTable = &[
    ("Schema", "org.datavec.api.transform.schema.Schema"),
    ("SequenceSchema", "org.datavec.api.transform.schema.SequenceSchema"),
];

pub const SEQUENCE_COMPARATOR: LegacyTable = &[
    ("NumericalColumnComparator", "org.datavec.api.transform.sequence.comparator.NumericalColumnComparator"),
    ("StringComparator", "org.datavec.api.transform.sequence.comparator.StringComparator"),
];

pub const SEQUENCE_SPLIT: LegacyTable = &[
    ("SequenceSplitTimeSeparation", "org.datavec.api.transform.sequence.split.SequenceSplitTimeSeparation"),
    ("SplitMaxLengthSequence", "org.datavec.api.transform.sequence.split.SplitMaxLengthSequence"),
];

pub const WINDOW_FUNCTION: LegacyTable = &[
    ("TimeWindowFunction", "org.datavec.api.transform.sequence.window.TimeWindowFunction"),
    ("OverlappingTimeWindowFunction", "org.datavec.api.transform.sequence.window.OverlappingTimeWindowFunction"),
];

pub const STRING_REDUCER: LegacyTable = &[
    ("StringReducer", "org.datavec.api.transform.stringreduce.StringReducer"),
];

pub const WRITABLE: LegacyTable = &[
    ("ArrayWritable", "org.datavec.api.writable.ArrayWritable"),
    ("BooleanWritable", "org.datavec.api.writable.BooleanWritable"),
    ("ByteWritable", "org.datavec.api.writable.ByteWritable"),
    ("DoubleWritable", "org.datavec.api.writable.DoubleWritable"),
    ("FloatWritable", "org.datavec.api.writable.FloatWritable"),
    ("IntWritable", "org.datavec.api.writable.IntWritable"),
    ("LongWritable", "org.datavec.api.writable.LongWritable"),
    ("NullWritable", "org.datavec.api.writable.NullWritable"),
    ("Text", "org.datavec.api.writable.Text"),
    ("BytesWritable", "org.datavec.api.writable.BytesWritable"),
];

pub const WRITABLE_COMPARATOR: LegacyTable = &[
    ("DoubleWritableComparator", "org.datavec.api.writable.comparator.DoubleWritableComparator"),
    ("FloatWritableComparator", "org.datavec.api.writable.comparator.FloatWritableComparator"),
    ("IntWritableComparator", "org.datavec.api.writable.comparator.IntWritableComparator"),
    ("LongWritableComparator", "org.datavec.api.writable.comparator.LongWritableComparator"),
    ("TextWritableComparator", "org.datavec.api.writable.comparator.TextWritableComparator"),
];
