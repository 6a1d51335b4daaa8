// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::CountryRecord;

/// (iso, name, dial code, region code, min length, max length)
type CountryRow = (&'static str, &'static str, &'static str, &'static str, usize, usize);

/// Compiled-in dataset in canonical order: ascending dial code, the main
/// country of a shared dial code first. Lengths count the digits left after
/// the full code is stripped.
const COUNTRY_TABLE: &[CountryRow] = &[
    ("US", "United States", "1", "", 10, 10),
    ("CA", "Canada", "1", "", 10, 10),
    ("BS", "Bahamas", "1", "242", 7, 7),
    ("BB", "Barbados", "1", "246", 7, 7),
    ("AI", "Anguilla", "1", "264", 7, 7),
    ("AG", "Antigua and Barbuda", "1", "268", 7, 7),
    ("VG", "British Virgin Islands", "1", "284", 7, 7),
    ("VI", "U.S. Virgin Islands", "1", "340", 7, 7),
    ("KY", "Cayman Islands", "1", "345", 7, 7),
    ("BM", "Bermuda", "1", "441", 7, 7),
    ("GD", "Grenada", "1", "473", 7, 7),
    ("TC", "Turks and Caicos Islands", "1", "649", 7, 7),
    ("MS", "Montserrat", "1", "664", 7, 7),
    ("MP", "Northern Mariana Islands", "1", "670", 7, 7),
    ("GU", "Guam", "1", "671", 7, 7),
    ("AS", "American Samoa", "1", "684", 7, 7),
    ("SX", "Sint Maarten", "1", "721", 7, 7),
    ("LC", "Saint Lucia", "1", "758", 7, 7),
    ("DM", "Dominica", "1", "767", 7, 7),
    ("VC", "Saint Vincent and the Grenadines", "1", "784", 7, 7),
    ("PR", "Puerto Rico", "1", "787", 7, 7),
    ("DO", "Dominican Republic", "1", "809", 7, 7),
    ("TT", "Trinidad and Tobago", "1", "868", 7, 7),
    ("KN", "Saint Kitts and Nevis", "1", "869", 7, 7),
    ("JM", "Jamaica", "1", "876", 7, 7),
    ("RU", "Russia", "7", "", 10, 10),
    ("KZ", "Kazakhstan", "7", "", 10, 10),
    ("EG", "Egypt", "20", "", 10, 10),
    ("ZA", "South Africa", "27", "", 9, 9),
    ("GR", "Greece", "30", "", 10, 10),
    ("NL", "Netherlands", "31", "", 9, 9),
    ("BE", "Belgium", "32", "", 8, 9),
    ("FR", "France", "33", "", 9, 9),
    ("ES", "Spain", "34", "", 9, 9),
    ("HU", "Hungary", "36", "", 8, 9),
    ("IT", "Italy", "39", "", 6, 12),
    ("RO", "Romania", "40", "", 9, 9),
    ("CH", "Switzerland", "41", "", 9, 12),
    ("AT", "Austria", "43", "", 10, 13),
    ("GB", "United Kingdom", "44", "", 10, 10),
    ("GG", "Guernsey", "44", "1481", 6, 6),
    ("JE", "Jersey", "44", "1534", 6, 6),
    ("IM", "Isle of Man", "44", "1624", 6, 6),
    ("DK", "Denmark", "45", "", 8, 8),
    ("SE", "Sweden", "46", "", 7, 13),
    ("NO", "Norway", "47", "", 8, 8),
    ("SJ", "Svalbard and Jan Mayen", "47", "79", 6, 6),
    ("PL", "Poland", "48", "", 9, 9),
    ("DE", "Germany", "49", "", 9, 15),
    ("PE", "Peru", "51", "", 9, 9),
    ("MX", "Mexico", "52", "", 10, 10),
    ("CU", "Cuba", "53", "", 8, 8),
    ("AR", "Argentina", "54", "", 10, 10),
    ("BR", "Brazil", "55", "", 10, 11),
    ("CL", "Chile", "56", "", 9, 9),
    ("CO", "Colombia", "57", "", 10, 10),
    ("VE", "Venezuela", "58", "", 10, 10),
    ("MY", "Malaysia", "60", "", 9, 10),
    ("AU", "Australia", "61", "", 9, 9),
    ("CC", "Cocos (Keeling) Islands", "61", "89162", 4, 4),
    ("CX", "Christmas Island", "61", "89164", 4, 4),
    ("ID", "Indonesia", "62", "", 10, 12),
    ("PH", "Philippines", "63", "", 10, 10),
    ("NZ", "New Zealand", "64", "", 8, 10),
    ("SG", "Singapore", "65", "", 8, 8),
    ("TH", "Thailand", "66", "", 9, 9),
    ("JP", "Japan", "81", "", 10, 10),
    ("KR", "South Korea", "82", "", 9, 11),
    ("VN", "Vietnam", "84", "", 9, 10),
    ("CN", "China", "86", "", 11, 12),
    ("TR", "Turkey", "90", "", 10, 10),
    ("IN", "India", "91", "", 10, 10),
    ("PK", "Pakistan", "92", "", 10, 10),
    ("AF", "Afghanistan", "93", "", 9, 9),
    ("LK", "Sri Lanka", "94", "", 9, 9),
    ("MM", "Myanmar", "95", "", 8, 10),
    ("IR", "Iran", "98", "", 10, 10),
    ("SS", "South Sudan", "211", "", 9, 9),
    ("MA", "Morocco", "212", "", 9, 9),
    ("EH", "Western Sahara", "212", "", 9, 9),
    ("DZ", "Algeria", "213", "", 9, 9),
    ("TN", "Tunisia", "216", "", 8, 8),
    ("LY", "Libya", "218", "", 9, 9),
    ("GM", "Gambia", "220", "", 7, 7),
    ("SN", "Senegal", "221", "", 9, 9),
    ("MR", "Mauritania", "222", "", 8, 8),
    ("ML", "Mali", "223", "", 8, 8),
    ("GN", "Guinea", "224", "", 9, 9),
    ("CI", "Côte d'Ivoire", "225", "", 10, 10),
    ("BF", "Burkina Faso", "226", "", 8, 8),
    ("NE", "Niger", "227", "", 8, 8),
    ("TG", "Togo", "228", "", 8, 8),
    ("BJ", "Benin", "229", "", 8, 8),
    ("MU", "Mauritius", "230", "", 7, 8),
    ("LR", "Liberia", "231", "", 7, 8),
    ("SL", "Sierra Leone", "232", "", 8, 8),
    ("GH", "Ghana", "233", "", 9, 9),
    ("NG", "Nigeria", "234", "", 10, 11),
    ("TD", "Chad", "235", "", 8, 8),
    ("CF", "Central African Republic", "236", "", 8, 8),
    ("CM", "Cameroon", "237", "", 9, 9),
    ("CV", "Cape Verde", "238", "", 7, 7),
    ("ST", "São Tomé and Príncipe", "239", "", 7, 7),
    ("GQ", "Equatorial Guinea", "240", "", 9, 9),
    ("GA", "Gabon", "241", "", 7, 8),
    ("CG", "Republic of the Congo", "242", "", 9, 9),
    ("CD", "DR Congo", "243", "", 9, 9),
    ("AO", "Angola", "244", "", 9, 9),
    ("GW", "Guinea-Bissau", "245", "", 7, 9),
    ("IO", "British Indian Ocean Territory", "246", "", 7, 7),
    ("SC", "Seychelles", "248", "", 7, 7),
    ("SD", "Sudan", "249", "", 9, 9),
    ("RW", "Rwanda", "250", "", 9, 9),
    ("ET", "Ethiopia", "251", "", 9, 9),
    ("SO", "Somalia", "252", "", 8, 9),
    ("DJ", "Djibouti", "253", "", 8, 8),
    ("KE", "Kenya", "254", "", 9, 10),
    ("TZ", "Tanzania", "255", "", 9, 9),
    ("UG", "Uganda", "256", "", 9, 9),
    ("BI", "Burundi", "257", "", 8, 8),
    ("MZ", "Mozambique", "258", "", 9, 9),
    ("ZM", "Zambia", "260", "", 9, 9),
    ("MG", "Madagascar", "261", "", 9, 9),
    ("RE", "Réunion", "262", "", 9, 9),
    ("YT", "Mayotte", "262", "", 9, 9),
    ("ZW", "Zimbabwe", "263", "", 9, 9),
    ("NA", "Namibia", "264", "", 9, 10),
    ("MW", "Malawi", "265", "", 7, 9),
    ("LS", "Lesotho", "266", "", 8, 8),
    ("BW", "Botswana", "267", "", 7, 8),
    ("SZ", "Eswatini", "268", "", 8, 8),
    ("KM", "Comoros", "269", "", 7, 7),
    ("SH", "Saint Helena", "290", "", 4, 5),
    ("ER", "Eritrea", "291", "", 7, 7),
    ("AW", "Aruba", "297", "", 7, 7),
    ("FO", "Faroe Islands", "298", "", 6, 6),
    ("GL", "Greenland", "299", "", 6, 6),
    ("GI", "Gibraltar", "350", "", 8, 8),
    ("PT", "Portugal", "351", "", 9, 9),
    ("LU", "Luxembourg", "352", "", 4, 11),
    ("IE", "Ireland", "353", "", 7, 9),
    ("IS", "Iceland", "354", "", 7, 9),
    ("AL", "Albania", "355", "", 9, 9),
    ("MT", "Malta", "356", "", 8, 8),
    ("CY", "Cyprus", "357", "", 8, 8),
    ("FI", "Finland", "358", "", 5, 12),
    ("AX", "Åland Islands", "358", "", 5, 12),
    ("BG", "Bulgaria", "359", "", 7, 9),
    ("LT", "Lithuania", "370", "", 8, 8),
    ("LV", "Latvia", "371", "", 8, 8),
    ("EE", "Estonia", "372", "", 7, 10),
    ("MD", "Moldova", "373", "", 8, 8),
    ("AM", "Armenia", "374", "", 8, 8),
    ("BY", "Belarus", "375", "", 9, 10),
    ("AD", "Andorra", "376", "", 6, 9),
    ("MC", "Monaco", "377", "", 8, 9),
    ("SM", "San Marino", "378", "", 6, 10),
    ("VA", "Vatican City", "379", "", 10, 10),
    ("UA", "Ukraine", "380", "", 9, 9),
    ("RS", "Serbia", "381", "", 8, 12),
    ("ME", "Montenegro", "382", "", 8, 8),
    ("XK", "Kosovo", "383", "", 8, 8),
    ("HR", "Croatia", "385", "", 8, 9),
    ("SI", "Slovenia", "386", "", 8, 8),
    ("BA", "Bosnia and Herzegovina", "387", "", 8, 8),
    ("MK", "North Macedonia", "389", "", 8, 8),
    ("CZ", "Czech Republic", "420", "", 9, 9),
    ("SK", "Slovakia", "421", "", 9, 9),
    ("LI", "Liechtenstein", "423", "", 7, 9),
    ("FK", "Falkland Islands", "500", "", 5, 5),
    ("GS", "South Georgia", "500", "", 5, 5),
    ("BZ", "Belize", "501", "", 7, 7),
    ("GT", "Guatemala", "502", "", 8, 8),
    ("SV", "El Salvador", "503", "", 8, 8),
    ("HN", "Honduras", "504", "", 8, 8),
    ("NI", "Nicaragua", "505", "", 8, 8),
    ("CR", "Costa Rica", "506", "", 8, 8),
    ("PA", "Panama", "507", "", 8, 8),
    ("PM", "Saint Pierre and Miquelon", "508", "", 6, 6),
    ("HT", "Haiti", "509", "", 8, 8),
    ("GP", "Guadeloupe", "590", "", 9, 9),
    ("BL", "Saint Barthélemy", "590", "", 9, 9),
    ("MF", "Saint Martin", "590", "", 9, 9),
    ("BO", "Bolivia", "591", "", 8, 8),
    ("GY", "Guyana", "592", "", 7, 7),
    ("EC", "Ecuador", "593", "", 8, 9),
    ("GF", "French Guiana", "594", "", 9, 9),
    ("PY", "Paraguay", "595", "", 9, 9),
    ("MQ", "Martinique", "596", "", 9, 9),
    ("SR", "Suriname", "597", "", 6, 7),
    ("UY", "Uruguay", "598", "", 8, 8),
    ("CW", "Curaçao", "599", "", 7, 8),
    ("BQ", "Caribbean Netherlands", "599", "", 7, 7),
    ("TL", "Timor-Leste", "670", "", 7, 8),
    ("NF", "Norfolk Island", "672", "", 6, 6),
    ("AQ", "Antarctica", "672", "", 6, 6),
    ("BN", "Brunei", "673", "", 7, 7),
    ("NR", "Nauru", "674", "", 7, 7),
    ("PG", "Papua New Guinea", "675", "", 8, 8),
    ("TO", "Tonga", "676", "", 5, 7),
    ("SB", "Solomon Islands", "677", "", 5, 7),
    ("VU", "Vanuatu", "678", "", 5, 7),
    ("FJ", "Fiji", "679", "", 7, 7),
    ("PW", "Palau", "680", "", 7, 7),
    ("WF", "Wallis and Futuna", "681", "", 6, 6),
    ("CK", "Cook Islands", "682", "", 5, 5),
    ("NU", "Niue", "683", "", 4, 4),
    ("WS", "Samoa", "685", "", 5, 7),
    ("KI", "Kiribati", "686", "", 5, 8),
    ("NC", "New Caledonia", "687", "", 6, 6),
    ("TV", "Tuvalu", "688", "", 5, 6),
    ("PF", "French Polynesia", "689", "", 8, 8),
    ("TK", "Tokelau", "690", "", 4, 4),
    ("FM", "Micronesia", "691", "", 7, 7),
    ("MH", "Marshall Islands", "692", "", 7, 7),
    ("KP", "North Korea", "850", "", 10, 10),
    ("HK", "Hong Kong", "852", "", 8, 8),
    ("MO", "Macau", "853", "", 8, 8),
    ("KH", "Cambodia", "855", "", 8, 9),
    ("LA", "Laos", "856", "", 8, 10),
    ("BD", "Bangladesh", "880", "", 10, 10),
    ("TW", "Taiwan", "886", "", 9, 9),
    ("MV", "Maldives", "960", "", 7, 7),
    ("LB", "Lebanon", "961", "", 7, 8),
    ("JO", "Jordan", "962", "", 9, 9),
    ("SY", "Syria", "963", "", 9, 9),
    ("IQ", "Iraq", "964", "", 10, 10),
    ("KW", "Kuwait", "965", "", 8, 8),
    ("SA", "Saudi Arabia", "966", "", 9, 9),
    ("YE", "Yemen", "967", "", 9, 9),
    ("OM", "Oman", "968", "", 8, 8),
    ("PS", "Palestine", "970", "", 9, 9),
    ("AE", "United Arab Emirates", "971", "", 9, 9),
    ("IL", "Israel", "972", "", 9, 9),
    ("BH", "Bahrain", "973", "", 8, 8),
    ("QA", "Qatar", "974", "", 8, 8),
    ("BT", "Bhutan", "975", "", 8, 8),
    ("MN", "Mongolia", "976", "", 8, 8),
    ("NP", "Nepal", "977", "", 10, 10),
    ("TJ", "Tajikistan", "992", "", 9, 9),
    ("TM", "Turkmenistan", "993", "", 8, 8),
    ("AZ", "Azerbaijan", "994", "", 9, 9),
    ("GE", "Georgia", "995", "", 9, 9),
    ("KG", "Kyrgyzstan", "996", "", 9, 9),
    ("UZ", "Uzbekistan", "998", "", 9, 9),
];

pub(super) fn compiled_countries() -> Vec<CountryRecord> {
    COUNTRY_TABLE
        .iter()
        .map(|&(iso_code, name, dial_code, region_code, min_length, max_length)| {
            CountryRecord::new(iso_code, name, dial_code, region_code, min_length, max_length)
        })
        .collect()
}
