//! Lookup tables shared by the filters, oscillators and modulators.
//!
//! Every frequency or time table has 257 entries so that an 8.8 split of a
//! 16-bit control value can interpolate between entry `i` and `i + 1` without
//! a bounds check on the last segment. The exponential decay table is the one
//! exception: it is indexed directly by an 8-bit time value.
//!
//! All frequency-dependent tables assume [`crate::SAMPLE_RATE`].

/// One full sine period in Q0.15, `round(32767 * sin(2 * pi * i / 256))`.
pub static SINE: [i16; 257] = [
    0, 804, 1608, 2410, 3212, 4011, 4808, 5602, 6393, 7179, 7962, 8739,
    9512, 10278, 11039, 11793, 12539, 13279, 14010, 14732, 15446, 16151, 16846, 17530,
    18204, 18868, 19519, 20159, 20787, 21403, 22005, 22594, 23170, 23731, 24279, 24811,
    25329, 25832, 26319, 26790, 27245, 27683, 28105, 28510, 28898, 29268, 29621, 29956,
    30273, 30571, 30852, 31113, 31356, 31580, 31785, 31971, 32137, 32285, 32412, 32521,
    32609, 32678, 32728, 32757, 32767, 32757, 32728, 32678, 32609, 32521, 32412, 32285,
    32137, 31971, 31785, 31580, 31356, 31113, 30852, 30571, 30273, 29956, 29621, 29268,
    28898, 28510, 28105, 27683, 27245, 26790, 26319, 25832, 25329, 24811, 24279, 23731,
    23170, 22594, 22005, 21403, 20787, 20159, 19519, 18868, 18204, 17530, 16846, 16151,
    15446, 14732, 14010, 13279, 12539, 11793, 11039, 10278, 9512, 8739, 7962, 7179,
    6393, 5602, 4808, 4011, 3212, 2410, 1608, 804, 0, -804, -1608, -2410,
    -3212, -4011, -4808, -5602, -6393, -7179, -7962, -8739, -9512, -10278, -11039, -11793,
    -12539, -13279, -14010, -14732, -15446, -16151, -16846, -17530, -18204, -18868, -19519, -20159,
    -20787, -21403, -22005, -22594, -23170, -23731, -24279, -24811, -25329, -25832, -26319, -26790,
    -27245, -27683, -28105, -28510, -28898, -29268, -29621, -29956, -30273, -30571, -30852, -31113,
    -31356, -31580, -31785, -31971, -32137, -32285, -32412, -32521, -32609, -32678, -32728, -32757,
    -32767, -32757, -32728, -32678, -32609, -32521, -32412, -32285, -32137, -31971, -31785, -31580,
    -31356, -31113, -30852, -30571, -30273, -29956, -29621, -29268, -28898, -28510, -28105, -27683,
    -27245, -26790, -26319, -25832, -25329, -24811, -24279, -23731, -23170, -22594, -22005, -21403,
    -20787, -20159, -19519, -18868, -18204, -17530, -16846, -16151, -15446, -14732, -14010, -13279,
    -12539, -11793, -11039, -10278, -9512, -8739, -7962, -7179, -6393, -5602, -4808, -4011,
    -3212, -2410, -1608, -804, 0,
];

/// One-pole coefficient `alpha = exp(-2 * pi * f / fs)` in Q0.15, indexed by
/// `note << 1` (128 half-cents per entry).
pub static ONE_POLE_ALPHA: [i16; 257] = [
    32733, 32732, 32730, 32729, 32727, 32726, 32724, 32723, 32721, 32719, 32717, 32715,
    32713, 32711, 32709, 32707, 32705, 32702, 32700, 32697, 32695, 32692, 32689, 32686,
    32683, 32680, 32676, 32673, 32669, 32666, 32662, 32658, 32654, 32649, 32645, 32640,
    32636, 32631, 32625, 32620, 32615, 32609, 32603, 32597, 32590, 32583, 32576, 32569,
    32562, 32554, 32546, 32538, 32529, 32520, 32511, 32501, 32491, 32481, 32470, 32459,
    32447, 32435, 32423, 32410, 32396, 32383, 32368, 32353, 32338, 32322, 32305, 32288,
    32270, 32251, 32232, 32212, 32191, 32169, 32147, 32124, 32100, 32075, 32049, 32022,
    31995, 31966, 31936, 31905, 31873, 31840, 31805, 31770, 31733, 31694, 31655, 31614,
    31571, 31527, 31481, 31433, 31384, 31333, 31280, 31226, 31169, 31110, 31050, 30987,
    30922, 30854, 30784, 30712, 30637, 30560, 30479, 30396, 30311, 30222, 30130, 30035,
    29936, 29835, 29729, 29621, 29508, 29392, 29272, 29148, 29020, 28887, 28750, 28609,
    28463, 28313, 28157, 27997, 27832, 27661, 27485, 27304, 27117, 26924, 26726, 26521,
    26311, 26094, 25871, 25642, 25406, 25164, 24915, 24659, 24397, 24127, 23851, 23567,
    23276, 22979, 22674, 22361, 22042, 21715, 21381, 21040, 20692, 20337, 19975, 19606,
    19230, 18848, 18460, 18065, 17664, 17258, 16846, 16430, 16008, 15582, 15152, 14718,
    14281, 13841, 13399, 12955, 12510, 12065, 11619, 11174, 10731, 10289, 9850, 9414,
    8982, 8555, 8133, 7717, 7308, 6906, 6513, 6129, 5754, 5389, 5035, 4692,
    4361, 4042, 3735, 3442, 3162, 2895, 2643, 2404, 2178, 1967, 1769, 1585,
    1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416,
    1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416,
    1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416, 1416,
    1416, 1416, 1416, 1416, 1416,
];

/// SVF integrator gain `g = tan(pi * f / fs)` in Q3.12, indexed by `note << 1`.
pub static SVF_G: [i16; 257] = [
    2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5,
    5, 6, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8,
    8, 9, 9, 9, 10, 10, 10, 11, 11, 12, 12, 12,
    13, 13, 14, 14, 15, 16, 16, 17, 17, 18, 19, 19,
    20, 21, 22, 23, 23, 24, 25, 26, 27, 28, 29, 30,
    31, 33, 34, 35, 36, 38, 39, 41, 42, 44, 45, 47,
    49, 51, 53, 55, 57, 59, 61, 63, 66, 68, 71, 73,
    76, 79, 82, 85, 88, 92, 95, 99, 102, 106, 110, 114,
    119, 123, 128, 133, 138, 143, 148, 154, 160, 166, 172, 178,
    185, 192, 199, 207, 215, 223, 231, 240, 249, 259, 268, 278,
    289, 300, 311, 323, 335, 348, 361, 375, 389, 404, 419, 435,
    451, 468, 486, 505, 524, 544, 565, 586, 609, 632, 656, 681,
    707, 735, 763, 792, 823, 855, 888, 922, 958, 996, 1035, 1076,
    1118, 1162, 1209, 1257, 1307, 1360, 1415, 1473, 1533, 1597, 1663, 1733,
    1806, 1883, 1964, 2050, 2140, 2235, 2336, 2444, 2558, 2679, 2808, 2947,
    3095, 3255, 3428, 3614, 3818, 4040, 4284, 4554, 4853, 5189, 5568, 6000,
    6499, 7082, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489,
    7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489,
    7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489,
    7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489, 7489,
    7489, 7489, 7489, 7489, 7489,
];

/// Per-sample multiplier in Q0.16 for the envelope stages. Larger index means
/// a slower stage.
pub static EXP_DECAY: [u16; 256] = [
    8869, 9571, 10299, 11051, 11827, 12624, 13441, 14277, 15131, 16000, 16883, 17778,
    18684, 19598, 20521, 21449, 22381, 23316, 24252, 25188, 26123, 27054, 27981, 28903,
    29819, 30727, 31626, 32516, 33396, 34265, 35122, 35967, 36798, 37616, 38420, 39210,
    39984, 40744, 41488, 42217, 42930, 43628, 44309, 44975, 45625, 46258, 46876, 47478,
    48065, 48636, 49192, 49732, 50258, 50769, 51265, 51747, 52214, 52668, 53109, 53536,
    53950, 54351, 54740, 55117, 55481, 55834, 56176, 56507, 56827, 57136, 57436, 57725,
    58005, 58275, 58536, 58789, 59033, 59268, 59496, 59715, 59927, 60132, 60329, 60520,
    60703, 60881, 61052, 61217, 61376, 61530, 61678, 61820, 61958, 62091, 62219, 62342,
    62461, 62575, 62685, 62792, 62894, 62993, 63088, 63179, 63268, 63352, 63434, 63513,
    63589, 63662, 63732, 63800, 63866, 63928, 63989, 64047, 64103, 64157, 64209, 64259,
    64307, 64354, 64398, 64441, 64483, 64523, 64561, 64598, 64633, 64667, 64700, 64732,
    64762, 64792, 64820, 64847, 64873, 64898, 64922, 64946, 64968, 64990, 65010, 65030,
    65050, 65068, 65086, 65103, 65119, 65135, 65150, 65165, 65179, 65193, 65206, 65218,
    65230, 65242, 65253, 65264, 65274, 65284, 65294, 65303, 65312, 65320, 65329, 65336,
    65344, 65351, 65358, 65365, 65372, 65378, 65384, 65390, 65395, 65401, 65406, 65411,
    65415, 65420, 65424, 65429, 65433, 65437, 65441, 65444, 65448, 65451, 65454, 65457,
    65460, 65463, 65466, 65469, 65471, 65474, 65476, 65478, 65481, 65483, 65485, 65487,
    65489, 65490, 65492, 65494, 65495, 65497, 65498, 65500, 65501, 65503, 65504, 65505,
    65506, 65507, 65508, 65509, 65510, 65511, 65512, 65513, 65514, 65515, 65516, 65517,
    65517, 65518, 65519, 65519, 65520, 65521, 65521, 65522, 65522, 65523, 65523, 65524,
    65524, 65525, 65525, 65526, 65526, 65526, 65527, 65527, 65527, 65528, 65528, 65528,
    65529, 65529, 65529, 65529,
];

/// LFO phase increment per block, in Q0.16 turns.
pub static LFO_RATE: [i16; 257] = [
    1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 5,
    5, 5, 5, 5, 6, 6, 6, 6, 6, 7, 7, 7,
    7, 8, 8, 8, 9, 9, 9, 9, 10, 10, 11, 11,
    11, 12, 12, 13, 13, 14, 14, 15, 15, 16, 16, 17,
    17, 18, 19, 19, 20, 21, 22, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 35, 36, 37, 39, 40,
    41, 43, 45, 46, 48, 50, 51, 53, 55, 57, 59, 62,
    64, 66, 69, 71, 74, 76, 79, 82, 85, 88, 91, 95,
    98, 102, 106, 109, 114, 118, 122, 126, 131, 136, 141, 146,
    151, 157, 163, 169, 175, 181, 188, 195, 202, 209, 217, 225,
    233, 242, 250, 260, 269, 279, 289, 300, 311, 322, 334, 346,
    359, 372, 386, 400, 414, 430, 445, 462, 479, 496, 514, 533,
    553, 573, 594, 616, 638, 662, 686, 711, 737, 764, 792, 821,
    851, 882, 915, 948, 983, 1019, 1056, 1095, 1135, 1177, 1220, 1264,
    1311, 1359, 1409, 1460, 1514, 1569, 1627, 1686, 1748, 1812, 1878, 1947,
    2018, 2092, 2169, 2248, 2331, 2416, 2505, 2596, 2692, 2790, 2892, 2998,
    3108, 3222, 3340, 3462, 3589, 3721, 3857, 3998, 4145, 4297, 4454, 4617,
    4786, 4962, 5144, 5332, 5527, 5730, 5940, 6157, 6383, 6617, 6859, 7110,
    7371, 7641, 7921, 8211, 8512, 8823, 9147, 9482, 9829, 10189, 10562, 10949,
    11350, 11766, 12197, 12644, 13107,
];

/// Feedback oscillator comb length in samples, indexed by shape.
pub static COMB_DELAY: [i16; 257] = [
    511, 504, 496, 489, 482, 475, 468, 461, 454, 448, 441, 435,
    429, 422, 416, 410, 404, 398, 393, 387, 381, 376, 370, 365,
    359, 354, 349, 344, 339, 334, 329, 324, 320, 315, 310, 306,
    302, 297, 293, 289, 284, 280, 276, 272, 268, 264, 260, 257,
    253, 249, 246, 242, 238, 235, 232, 228, 225, 222, 218, 215,
    212, 209, 206, 203, 200, 197, 194, 191, 189, 186, 183, 181,
    178, 175, 173, 170, 168, 165, 163, 161, 158, 156, 154, 151,
    149, 147, 145, 143, 141, 139, 137, 135, 133, 131, 129, 127,
    125, 123, 122, 120, 118, 116, 115, 113, 111, 110, 108, 107,
    105, 103, 102, 100, 99, 98, 96, 95, 93, 92, 91, 89,
    88, 87, 86, 84, 83, 82, 81, 79, 78, 77, 76, 75,
    74, 73, 72, 71, 70, 69, 68, 67, 66, 65, 64, 63,
    62, 61, 60, 59, 58, 58, 57, 56, 55, 54, 53, 53,
    52, 51, 50, 50, 49, 48, 48, 47, 46, 46, 45, 44,
    44, 43, 42, 42, 41, 40, 40, 39, 39, 38, 38, 37,
    37, 36, 35, 35, 34, 34, 33, 33, 33, 32, 32, 31,
    31, 30, 30, 29, 29, 28, 28, 28, 27, 27, 26, 26,
    26, 25, 25, 25, 24, 24, 24, 23, 23, 23, 22, 22,
    22, 21, 21, 21, 20, 20, 20, 19, 19, 19, 19, 18,
    18, 18, 18, 17, 17, 17, 17, 16, 16, 16, 16, 15,
    15, 15, 15, 15, 14, 14, 14, 14, 13, 13, 13, 13,
    13, 13, 12, 12, 12,
];

/// Spacing of [`NOTE_TO_FREQ`] in half-cents.
pub const NOTE_TO_FREQ_STEP: i32 = 16;

/// Phase increment in Q0.32 turns per sample for note `16 * i` half-cents,
/// saturated at `u32::MAX` above the range a 32-bit accumulator can express.
pub static NOTE_TO_FREQ: [u32; 2049] = [
    731558, 734946, 738350, 741770, 745206, 748657, 752125, 755609,
    759108, 762624, 766157, 769705, 773270, 776852, 780450, 784065,
    787696, 791344, 795010, 798692, 802391, 806108, 809841, 813592,
    817360, 821146, 824949, 828770, 832609, 836465, 840340, 844232,
    848142, 852070, 856017, 859982, 863965, 867966, 871986, 876025,
    880083, 884159, 888254, 892368, 896501, 900654, 904825, 909016,
    913226, 917456, 921705, 925974, 930263, 934572, 938901, 943249,
    947618, 952007, 956417, 960846, 965297, 969768, 974259, 978772,
    983305, 987859, 992435, 997032, 1001649, 1006289, 1010950, 1015632,
    1020336, 1025062, 1029810, 1034579, 1039371, 1044185, 1049022, 1053880,
    1058762, 1063665, 1068592, 1073541, 1078514, 1083509, 1088527, 1093569,
    1098634, 1103723, 1108835, 1113970, 1119130, 1124313, 1129521, 1134753,
    1140008, 1145288, 1150593, 1155922, 1161276, 1166655, 1172058, 1177487,
    1182941, 1188420, 1193924, 1199454, 1205009, 1210591, 1216198, 1221831,
    1227490, 1233175, 1238887, 1244625, 1250390, 1256181, 1261999, 1267844,
    1273717, 1279616, 1285543, 1291497, 1297479, 1303488, 1309526, 1315591,
    1321684, 1327806, 1333956, 1340134, 1346341, 1352577, 1358842, 1365136,
    1371459, 1377811, 1384192, 1390603, 1397044, 1403515, 1410016, 1416546,
    1423107, 1429699, 1436320, 1442973, 1449656, 1456371, 1463116, 1469893,
    1476701, 1483541, 1490412, 1497315, 1504250, 1511217, 1518217, 1525249,
    1532313, 1539410, 1546540, 1553703, 1560900, 1568129, 1575392, 1582689,
    1590019, 1597384, 1604782, 1612215, 1619682, 1627184, 1634721, 1642292,
    1649899, 1657541, 1665218, 1672931, 1680679, 1688464, 1696284, 1704141,
    1712034, 1719963, 1727930, 1735933, 1743973, 1752050, 1760165, 1768318,
    1776508, 1784736, 1793003, 1801307, 1809650, 1818032, 1826453, 1834912,
    1843411, 1851949, 1860527, 1869144, 1877801, 1886499, 1895236, 1904014,
    1912833, 1921693, 1930593, 1939535, 1948519, 1957543, 1966610, 1975719,
    1984870, 1994063, 2003299, 2012578, 2021899, 2031264, 2040672, 2050124,
    2059619, 2069159, 2078742, 2088371, 2098043, 2107761, 2117523, 2127331,
    2137184, 2147083, 2157027, 2167018, 2177055, 2187138, 2197268, 2207445,
    2217669, 2227941, 2238260, 2248627, 2259042, 2269505, 2280017, 2290577,
    2301186, 2311844, 2322552, 2333310, 2344117, 2354974, 2365881, 2376839,
    2387848, 2398908, 2410019, 2421181, 2432395, 2443661, 2454980, 2466350,
    2477774, 2489250, 2500779, 2512362, 2523998, 2535689, 2547433, 2559232,
    2571086, 2582994, 2594958, 2606977, 2619051, 2631182, 2643369, 2655612,
    2667912, 2680269, 2692683, 2705155, 2717684, 2730271, 2742917, 2755621,
    2768385, 2781207, 2794088, 2807030, 2820031, 2833092, 2846214, 2859397,
    2872641, 2885946, 2899313, 2912742, 2926232, 2939786, 2953402, 2967081,
    2980824, 2994630, 3008500, 3022434, 3036433, 3050497, 3064626, 3078820,
    3093080, 3107407, 3121799, 3136258, 3150784, 3165378, 3180039, 3194768,
    3209565, 3224430, 3239365, 3254369, 3269442, 3284585, 3299798, 3315082,
    3330436, 3345861, 3361358, 3376927, 3392568, 3408281, 3424067, 3439926,
    3455859, 3471865, 3487946, 3504101, 3520331, 3536636, 3553016, 3569473,
    3586005, 3602615, 3619301, 3636064, 3652905, 3669824, 3686822, 3703898,
    3721053, 3738288, 3755602, 3772997, 3790472, 3808029, 3825666, 3843386,
    3861187, 3879071, 3897037, 3915087, 3933220, 3951438, 3969740, 3988126,
    4006598, 4025155, 4043798, 4062528, 4081344, 4100248, 4119239, 4138318,
    4157485, 4176741, 4196086, 4215521, 4235046, 4254662, 4274368, 4294165,
    4314054, 4334036, 4354110, 4374276, 4394537, 4414891, 4435339, 4455882,
    4476520, 4497254, 4518084, 4539010, 4560033, 4581154, 4602372, 4623689,
    4645104, 4666619, 4688233, 4709948, 4731763, 4753679, 4775696, 4797816,
    4820037, 4842362, 4864791, 4887323, 4909959, 4932700, 4955547, 4978500,
    5001558, 5024724, 5047997, 5071378, 5094867, 5118464, 5142171, 5165988,
    5189915, 5213953, 5238103, 5262364, 5286737, 5311224, 5335824, 5360538,
    5385366, 5410309, 5435368, 5460543, 5485834, 5511243, 5536769, 5562414,
    5588177, 5614060, 5640062, 5666185, 5692429, 5718794, 5745282, 5771892,
    5798626, 5825483, 5852465, 5879572, 5906804, 5934162, 5961647, 5989260,
    6017000, 6044869, 6072867, 6100994, 6129252, 6157641, 6186161, 6214813,
    6243598, 6272516, 6301569, 6330756, 6360078, 6389535, 6419130, 6448861,
    6478730, 6508737, 6538884, 6569170, 6599596, 6630163, 6660872, 6691723,
    6722717, 6753854, 6785136, 6816562, 6848134, 6879853, 6911718, 6943731,
    6975892, 7008202, 7040662, 7073272, 7106033, 7138946, 7172011, 7205229,
    7238602, 7272128, 7305811, 7339649, 7373644, 7407796, 7442106, 7476576,
    7511205, 7545994, 7580945, 7616057, 7651333, 7686771, 7722374, 7758141,
    7794074, 7830174, 7866441, 7902876, 7939479, 7976252, 8013196, 8050310,
    8087597, 8125056, 8162688, 8200495, 8238477, 8276635, 8314970, 8353482,
    8392173, 8431042, 8470092, 8509323, 8548735, 8588330, 8628109, 8668071,
    8708219, 8748553, 8789073, 8829781, 8870678, 8911764, 8953040, 8994508,
    9036168, 9078020, 9120067, 9162308, 9204745, 9247378, 9290209, 9333238,
    9376467, 9419895, 9463525, 9507357, 9551392, 9595631, 9640075, 9684725,
    9729581, 9774645, 9819918, 9865401, 9911094, 9956999, 10003117, 10049448,
    10095994, 10142755, 10189733, 10236929, 10284343, 10331976, 10379831, 10427907,
    10476205, 10524728, 10573475, 10622448, 10671648, 10721075, 10770732, 10820618,
    10870736, 10921086, 10971668, 11022486, 11073538, 11124827, 11176354, 11228119,
    11280124, 11332370, 11384858, 11437589, 11490564, 11543784, 11597251, 11650966,
    11704930, 11759143, 11813608, 11868324, 11923295, 11978519, 12034000, 12089738,
    12145733, 12201988, 12258504, 12315281, 12372322, 12429626, 12487196, 12545033,
    12603137, 12661511, 12720155, 12779071, 12838259, 12897722, 12957460, 13017475,
    13077767, 13138339, 13199192, 13260326, 13321744, 13383446, 13445433, 13507708,
    13570272, 13633125, 13696269, 13759706, 13823436, 13887462, 13951784, 14016404,
    14081323, 14146544, 14212066, 14277891, 14344022, 14410459, 14477203, 14544257,
    14611621, 14679298, 14747287, 14815592, 14884213, 14953152, 15022410, 15091989,
    15161890, 15232115, 15302665, 15373542, 15444747, 15516282, 15588149, 15660348,
    15732882, 15805751, 15878958, 15952504, 16026391, 16100620, 16175193, 16250111,
    16325376, 16400990, 16476954, 16553270, 16629940, 16706964, 16784345, 16862085,
    16940185, 17018646, 17097471, 17176661, 17256217, 17336143, 17416438, 17497105,
    17578146, 17659562, 17741356, 17823528, 17906081, 17989016, 18072335, 18156040,
    18240133, 18324616, 18409489, 18494756, 18580418, 18666476, 18752933, 18839791,
    18927050, 19014714, 19102784, 19191262, 19280150, 19369449, 19459162, 19549291,
    19639837, 19730802, 19822189, 19913999, 20006234, 20098896, 20191988, 20285510,
    20379466, 20473857, 20568685, 20663953, 20759662, 20855814, 20952411, 21049456,
    21146950, 21244896, 21343295, 21442150, 21541463, 21641236, 21741472, 21842171,
    21943337, 22044971, 22147076, 22249654, 22352708, 22456238, 22560248, 22664740,
    22769715, 22875177, 22981128, 23087569, 23194503, 23301932, 23409859, 23518286,
    23627215, 23736649, 23846589, 23957039, 24068000, 24179475, 24291467, 24403977,
    24517008, 24630563, 24744644, 24859253, 24974393, 25090066, 25206275, 25323022,
    25440310, 25558141, 25676518, 25795444, 25914920, 26034949, 26155535, 26276679,
    26398384, 26520652, 26643487, 26766891, 26890867, 27015417, 27140543, 27266249,
    27392538, 27519411, 27646872, 27774923, 27903568, 28032808, 28162647, 28293087,
    28424131, 28555783, 28688044, 28820918, 28954407, 29088514, 29223243, 29358595,
    29494575, 29631184, 29768426, 29906303, 30044820, 30183978, 30323780, 30464230,
    30605330, 30747084, 30889495, 31032565, 31176297, 31320696, 31465763, 31611502,
    31757916, 31905009, 32052782, 32201240, 32350386, 32500223, 32650753, 32801981,
    32953909, 33106541, 33259879, 33413928, 33568691, 33724170, 33880369, 34037292,
    34194942, 34353322, 34512435, 34672285, 34832876, 34994211, 35156292, 35319125,
    35482712, 35647056, 35812161, 35978032, 36144670, 36312081, 36480266, 36649231,
    36818978, 36989512, 37160835, 37332952, 37505866, 37679581, 37854101, 38029429,
    38205569, 38382524, 38560300, 38738898, 38918324, 39098581, 39279673, 39461604,
    39644377, 39827997, 40012467, 40197792, 40383975, 40571021, 40758932, 40947715,
    41137371, 41327906, 41519323, 41711627, 41904822, 42098911, 42293900, 42489791,
    42686590, 42884301, 43082927, 43282473, 43482943, 43684342, 43886674, 44089943,
    44294153, 44499309, 44705415, 44912476, 45120496, 45329480, 45539431, 45750355,
    45962256, 46175138, 46389006, 46603865, 46819719, 47036572, 47254430, 47473298,
    47693178, 47914078, 48136000, 48358950, 48582933, 48807954, 49034016, 49261126,
    49489287, 49718505, 49948785, 50180132, 50412550, 50646044, 50880620, 51116283,
    51353037, 51590887, 51829840, 52069899, 52311069, 52553357, 52796767, 53041305,
    53286975, 53533783, 53781734, 54030833, 54281086, 54532499, 54785076, 55038822,
    55293744, 55549847, 55807136, 56065616, 56325294, 56586174, 56848263, 57111565,
    57376088, 57641835, 57908813, 58177028, 58446485, 58717190, 58989149, 59262368,
    59536852, 59812607, 60089639, 60367955, 60647560, 60928459, 61210660, 61494168,
    61778989, 62065129, 62352595, 62641392, 62931526, 63223005, 63515833, 63810018,
    64105565, 64402481, 64700772, 65000445, 65301506, 65603961, 65907818, 66213081,
    66519758, 66827856, 67137381, 67448340, 67760738, 68074584, 68389883, 68706643,
    69024870, 69344571, 69665752, 69988421, 70312585, 70638250, 70965423, 71294112,
    71624323, 71956064, 72289341, 72624161, 72960533, 73298462, 73637957, 73979024,
    74321671, 74665904, 75011733, 75359162, 75708202, 76058857, 76411137, 76765049,
    77120599, 77477797, 77836649, 78197163, 78559347, 78923208, 79288755, 79655994,
    80024935, 80395584, 80767950, 81142041, 81517865, 81895429, 82274742, 82655812,
    83038647, 83423255, 83809644, 84197823, 84587800, 84979583, 85373181, 85768602,
    86165854, 86564946, 86965887, 87368684, 87773348, 88179885, 88588306, 88998618,
    89410830, 89824952, 90240992, 90658959, 91078862, 91500710, 91924511, 92350275,
    92778012, 93207729, 93639437, 94073145, 94508861, 94946595, 95386357, 95828155,
    96272000, 96717901, 97165867, 97615907, 98068032, 98522251, 98978574, 99437011,
    99897571, 100360264, 100825100, 101292089, 101761241, 102232566, 102706074, 103181775,
    103659679, 104139797, 104622139, 105106715, 105593535, 106082609, 106573950, 107067565,
    107563468, 108061666, 108562173, 109064998, 109570151, 110077644, 110587488, 111099693,
    111614271, 112131232, 112650587, 113172348, 113696526, 114223131, 114752175, 115283670,
    115817626, 116354056, 116892970, 117434380, 117978298, 118524735, 119073703, 119625214,
    120179279, 120735910, 121295119, 121856919, 122421321, 122988336, 123557978, 124130259,
    124705189, 125282783, 125863052, 126446009, 127031666, 127620035, 128211130, 128804962,
    129401544, 130000890, 130603012, 131207923, 131815635, 132426162, 133039517, 133655713,
    134274762, 134896679, 135521477, 136149168, 136779767, 137413286, 138049740, 138689141,
    139331504, 139976842, 140625170, 141276500, 141930846, 142588224, 143248646, 143912127,
    144578681, 145248323, 145921065, 146596924, 147275914, 147958048, 148643341, 149331809,
    150023465, 150718325, 151416403, 152117715, 152822274, 153530097, 154241199, 154955594,
    155673298, 156394326, 157118693, 157846416, 158577509, 159311988, 160049870, 160791169,
    161535901, 162284083, 163035730, 163790858, 164549484, 165311624, 166077293, 166846509,
    167619288, 168395646, 169175600, 169959166, 170746361, 171537203, 172331708, 173129892,
    173931773, 174737368, 175546695, 176359770, 177176611, 177997236, 178821661, 179649905,
    180481984, 181317918, 182157724, 183001419, 183849022, 184700551, 185556024, 186415459,
    187278874, 188146289, 189017722, 189893190, 190772714, 191656311, 192544000, 193435801,
    194331733, 195231814, 196136065, 197044503, 197957149, 198874022, 199795142, 200720528,
    201650200, 202584178, 203522482, 204465132, 205412148, 206363550, 207319359, 208279594,
    209244278, 210213429, 211187069, 212165219, 213147899, 214135131, 215126935, 216123333,
    217124346, 218129995, 219140302, 220155289, 221174976, 222199387, 223228542, 224262464,
    225301175, 226344696, 227393051, 228446262, 229504351, 230567340, 231635253, 232708112,
    233785940, 234868761, 235956596, 237049470, 238147406, 239250427, 240358558, 241471820,
    242590239, 243713838, 244842641, 245976673, 247115956, 248260517, 249410379, 250565567,
    251726105, 252892018, 254063332, 255240070, 256422259, 257609923, 258803089, 260001780,
    261206024, 262415845, 263631270, 264852324, 266079034, 267311425, 268549525, 269793359,
    271042954, 272298337, 273559534, 274826572, 276099480, 277378283, 278663008, 279953685,
    281250339, 282552999, 283861693, 285176448, 286497292, 287824254, 289157362, 290496645,
    291842131, 293193849, 294551827, 295916095, 297286682, 298663617, 300046930, 301436650,
    302832806, 304235429, 305644549, 307060195, 308482397, 309911187, 311346595, 312788651,
    314237386, 315692832, 317155018, 318623977, 320099739, 321582337, 323071802, 324568165,
    326071459, 327581716, 329098968, 330623247, 332154586, 333693018, 335238576, 336791292,
    338351199, 339918332, 341492723, 343074406, 344663415, 346259784, 347863546, 349474737,
    351093390, 352719540, 354353223, 355994471, 357643322, 359299809, 360963969, 362635836,
    364315448, 366002838, 367698044, 369401102, 371112047, 372830918, 374557749, 376292578,
    378035443, 379786380, 381545427, 383312621, 385088001, 386871603, 388663466, 390463629,
    392272129, 394089006, 395914298, 397748044, 399590283, 401441055, 403300400, 405168356,
    407044964, 408930264, 410824295, 412727100, 414638717, 416559189, 418488555, 420426858,
    422374138, 424330438, 426295798, 428270262, 430253870, 432246666, 434248692, 436259990,
    438280604, 440310578, 442349953, 444398774, 446457084, 448524928, 450602349, 452689393,
    454786103, 456892524, 459008701, 461134680, 463270506, 465416224, 467571880, 469737521,
    471913192, 474098941, 476294812, 478500855, 480717115, 482943640, 485180478, 487427676,
    489685282, 491953345, 494231913, 496521034, 498820758, 501131133, 503452209, 505784036,
    508126663, 510480140, 512844518, 515219847, 517606178, 520003561, 522412048, 524831691,
    527262540, 529704648, 532158068, 534622851, 537099050, 539586718, 542085908, 544596673,
    547119068, 549653145, 552198959, 554756565, 557326017, 559907370, 562500678, 565105998,
    567723385, 570352895, 572994584, 575648508, 578314725, 580993290, 583684262, 586387697,
    589103654, 591832191, 594573365, 597327235, 600093860, 602873300, 605665612, 608470858,
    611289097, 614120389, 616964795, 619822375, 622693190, 625577303, 628474773, 631385663,
    634310036, 637247954, 640199479, 643164674, 646143604, 649136330, 652142919, 655163432,
    658197936, 661246495, 664309173, 667386037, 670477152, 673582583, 676702399, 679836664,
    682985446, 686148812, 689326830, 692519567, 695727093, 698949474, 702186780, 705439081,
    708706445, 711988943, 715286643, 718599618, 721927938, 725271673, 728630895, 732005676,
    735396088, 738802203, 742224095, 745661835, 749115498, 752585157, 756070886, 759572760,
    763090854, 766625243, 770176001, 773743206, 777326932, 780927257, 784544258, 788178012,
    791828596, 795496088, 799180567, 802882111, 806600799, 810336712, 814089928, 817860527,
    821648591, 825454199, 829277435, 833118378, 836977111, 840853716, 844748277, 848660876,
    852591597, 856540523, 860507740, 864493332, 868497383, 872519980, 876561209, 880621155,
    884699906, 888797547, 892914168, 897049856, 901204699, 905378786, 909572205, 913785048,
    918017402, 922269360, 926541012, 930832448, 935143761, 939475042, 943826385, 948197881,
    952589625, 957001710, 961434230, 965887281, 970360956, 974855352, 979370564, 983906690,
    988463825, 993042068, 997641516, 1002262266, 1006904419, 1011568072, 1016253326, 1020960281,
    1025689036, 1030439694, 1035212355, 1040007122, 1044824096, 1049663381, 1054525080, 1059409297,
    1064316136, 1069245702, 1074198100, 1079173435, 1084171815, 1089193346, 1094238135, 1099306290,
    1104397919, 1109513130, 1114652034, 1119814739, 1125001356, 1130211996, 1135446770, 1140705790,
    1145989168, 1151297017, 1156629449, 1161986580, 1167368524, 1172775395, 1178207309, 1183664381,
    1189146729, 1194654470, 1200187720, 1205746599, 1211331225, 1216941717, 1222578194, 1228240778,
    1233929590, 1239644750, 1245386381, 1251154605, 1256949546, 1262771327, 1268620072, 1274495908,
    1280398958, 1286329349, 1292287207, 1298272661, 1304285837, 1310326865, 1316395872, 1322492989,
    1328618346, 1334772074, 1340954303, 1347165167, 1353404797, 1359673328, 1365970892, 1372297624,
    1378653660, 1385039135, 1391454185, 1397898948, 1404373561, 1410878162, 1417412890, 1423977885,
    1430573287, 1437199237, 1443855876, 1450543346, 1457261790, 1464011352, 1470792176, 1477604407,
    1484448189, 1491323670, 1498230996, 1505170314, 1512141773, 1519145521, 1526181708, 1533250485,
    1540352002, 1547486411, 1554653864, 1561854515, 1569088516, 1576356024, 1583657191, 1590992176,
    1598361134, 1605764222, 1613201599, 1620673424, 1628179855, 1635721054, 1643297181, 1650908399,
    1658554869, 1666236755, 1673954221, 1681707432, 1689496554, 1697321751, 1705183193, 1713081047,
    1721015480, 1728986663, 1736994767, 1745039961, 1753122418, 1761242310, 1769399811, 1777595095,
    1785828337, 1794099712, 1802409398, 1810757571, 1819144411, 1827570095, 1836034805, 1844538720,
    1853082023, 1861664896, 1870287521, 1878950084, 1887652769, 1896395762, 1905179250, 1914003420,
    1922868460, 1931774561, 1940721912, 1949710704, 1958741129, 1967813380, 1976927651, 1986084136,
    1995283031, 2004524533, 2013808838, 2023136144, 2032506652, 2041920561, 2051378072, 2060879388,
    2070424710, 2080014243, 2089648192, 2099326762, 2109050160, 2118818594, 2128632272, 2138491403,
    2148396199, 2158346871, 2168343631, 2178386692, 2188476270, 2198612580, 2208795837, 2219026260,
    2229304068, 2239629478, 2250002713, 2260423993, 2270893541, 2281411580, 2291978336, 2302594033,
    2313258899, 2323973161, 2334737048, 2345550790, 2356414617, 2367328763, 2378293459, 2389308940,
    2400375441, 2411493198, 2422662449, 2433883433, 2445156389, 2456481557, 2467859180, 2479289500,
    2490772762, 2502309210, 2513899092, 2525542654, 2537240145, 2548991815, 2560797915, 2572658697,
    2584574415, 2596545322, 2608571674, 2620653729, 2632791744, 2644985978, 2657236692, 2669544147,
    2681908606, 2694330334, 2706809595, 2719346655, 2731941784, 2744595248, 2757307320, 2770078270,
    2782908370, 2795797896, 2808747121, 2821756324, 2834825780, 2847955770, 2861146574, 2874398473,
    2887711751, 2901086692, 2914523581, 2928022705, 2941584353, 2955208814, 2968896379, 2982647340,
    2996461991, 3010340628, 3024283545, 3038291042, 3052363417, 3066500970, 3080704004, 3094972822,
    3109307729, 3123709030, 3138177033, 3152712047, 3167314383, 3181984352, 3196722267, 3211528444,
    3226403198, 3241346847, 3256359710, 3271442108, 3286594363, 3301816798, 3317109738, 3332473510,
    3347908443, 3363414865, 3378993107, 3394643503, 3410366386, 3426162093, 3442030960, 3457973327,
    3473989534, 3490079922, 3506244836, 3522484620, 3538799622, 3555190190, 3571656673, 3588199424,
    3604818795, 3621515142, 3638288821, 3655140190, 3672069610, 3689077440, 3706164046, 3723329791,
    3740575042, 3757900168, 3775305538, 3792791524, 3810358500, 3828006839, 3845736921, 3863549122,
    3881443824, 3899421408, 3917482258, 3935626760, 3953855302, 3972168272, 3990566062, 4009049065,
    4027617675, 4046272289, 4065013305, 4083841123, 4102756145, 4121758776, 4140849420, 4160028486,
    4179296384, 4198653524, 4218100320, 4237637187, 4257264543, 4276982806, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295, 4294967295,
    4294967295,
];
